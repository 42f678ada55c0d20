//! One-shot site build orchestration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use crate::assets;
use crate::config::BuildConfig;
use crate::stylesheet;
use crate::templates::{self, TemplateEngine};

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of templates rendered to output files
    pub pages: usize,

    /// Number of templates skipped as partials
    pub partials_skipped: usize,

    /// Number of assets copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read template directory: {0}")]
    ReadError(String),

    #[error("Failed to render template: {path}: {message}")]
    TemplateError { path: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Stylesheet compiler failed: {0}")]
    CompilerError(String),
}

/// Sequential site builder.
///
/// Runs four steps in fixed order: output directories, template rendering,
/// stylesheet compilation, asset copies. The first error aborts the build;
/// whatever was written before it stays on disk, nothing is rolled back.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        let templates = TemplateEngine::new(&config.template_dir);
        Self { config, templates }
    }

    /// Build the site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        self.ensure_output_dirs()?;

        let (pages, partials_skipped) = self.render_templates()?;

        stylesheet::compile(&self.config.stylesheet, &self.config.output_dir)?;

        let assets = assets::copy_assets(&self.config.assets, &self.config.output_dir)?;

        Ok(BuildResult {
            pages,
            partials_skipped,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Create the output root and each configured extra subdirectory,
    /// with any missing parents. No-op when already present.
    fn ensure_output_dirs(&self) -> Result<(), BuildError> {
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for dir in &self.config.extra_dirs {
            fs::create_dir_all(self.config.output_dir.join(dir))
                .map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        Ok(())
    }

    /// Discover every template under the template root, as forward-slash
    /// relative names in directory-walk order.
    fn discover_templates(&self) -> Result<Vec<String>, BuildError> {
        if !self.config.template_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Template directory not found: {}",
                self.config.template_dir.display()
            )));
        }

        let mut names = Vec::new();

        for entry in WalkDir::new(&self.config.template_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let file_name = path.file_name().and_then(|f| f.to_str()).unwrap_or("");
            if !file_name.ends_with(&self.config.template_suffix) {
                continue;
            }

            let relative = path
                .strip_prefix(&self.config.template_dir)
                .unwrap_or(path);

            // Template names use forward slashes regardless of platform.
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            names.push(name);
        }

        Ok(names)
    }

    /// Render every eligible template into the output tree.
    fn render_templates(&self) -> Result<(usize, usize), BuildError> {
        let mut pages = 0;
        let mut skipped = 0;

        for name in self.discover_templates()? {
            if self.config.skip_partials && templates::is_partial(&name) {
                tracing::debug!("Skipping partial {}", name);
                skipped += 1;
                continue;
            }

            let rendered =
                self.templates
                    .render(&name)
                    .map_err(|e| BuildError::TemplateError {
                        path: name.clone(),
                        message: e.to_string(),
                    })?;

            let output_path = self.output_path(&name);

            // Nested templates need their output directory at write time.
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::write(&output_path, rendered)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;

            tracing::debug!("Rendered {} -> {}", name, output_path.display());
            pages += 1;
        }

        Ok((pages, skipped))
    }

    /// Strip the template suffix and resolve under the output root,
    /// preserving the relative directory structure.
    fn output_path(&self, name: &str) -> PathBuf {
        let stripped = name.strip_suffix(&self.config.template_suffix).unwrap_or(name);
        self.config.output_dir.join(stripped)
    }
}
