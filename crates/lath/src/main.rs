//! Lath CLI - one-shot static site build tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lath")]
#[command(about = "One-shot static site build tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to lath.toml config file
    #[arg(short, long, default_value = "lath.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site
    Build {
        /// Output directory (defaults to config or "static")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail the build when the stylesheet compiler fails
        #[arg(long)]
        strict_css: bool,

        /// Render underscore-prefixed partials as standalone pages
        #[arg(long)]
        render_partials: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build {
            output,
            strict_css,
            render_partials,
        } => {
            commands::build::run(&cli.config, output, strict_css, render_partials)?;
        }
    }

    Ok(())
}
