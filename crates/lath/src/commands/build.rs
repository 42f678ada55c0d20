//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use lath_build::{AssetMapping, BuildConfig, SiteBuilder, StylesheetConfig};
use serde::Deserialize;

/// Configuration file structure (lath.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    templates: TemplatesConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    css: CssConfig,
    /// Files copied verbatim into the output tree
    assets: Option<Vec<AssetEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct TemplatesConfig {
    dir: String,
    suffix: String,
    skip_partials: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
            suffix: ".jinja".to_string(),
            skip_partials: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OutputConfig {
    dir: String,
    extra_dirs: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "static".to_string(),
            extra_dirs: vec!["comments".to_string()],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CssConfig {
    compiler: String,
    input: String,
    output: String,
    strict: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            compiler: "sass".to_string(),
            input: "src/style.scss".to_string(),
            output: "style.css".to_string(),
            strict: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AssetEntry {
    source: String,
    dest: String,
}

/// Load configuration from lath.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    strict_css: bool,
    render_partials: bool,
) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        template_dir: PathBuf::from(&file_config.templates.dir),
        template_suffix: file_config.templates.suffix,
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.output.dir)),
        extra_dirs: file_config.output.extra_dirs.iter().map(PathBuf::from).collect(),
        skip_partials: file_config.templates.skip_partials && !render_partials,
        stylesheet: StylesheetConfig {
            compiler: file_config.css.compiler,
            input: PathBuf::from(&file_config.css.input),
            output: PathBuf::from(&file_config.css.output),
            strict: file_config.css.strict || strict_css,
        },
        assets: match file_config.assets {
            Some(entries) => entries
                .into_iter()
                .map(|a| AssetMapping {
                    source: PathBuf::from(a.source),
                    dest: PathBuf::from(a.dest),
                })
                .collect(),
            None => BuildConfig::default().assets,
        },
    };

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Rendered {} pages ({} partials skipped), copied {} assets in {}ms",
        result.pages,
        result.partials_skipped,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
