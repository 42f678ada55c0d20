//! Build configuration.

use std::path::PathBuf;

/// Configuration for building a site.
///
/// The defaults reproduce the conventional layout: templates under
/// `templates/`, output under `static/`, a `sass` stylesheet and one script
/// asset under `src/`.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Template source directory
    pub template_dir: PathBuf,

    /// Suffix identifying template files, stripped to form output names
    pub template_suffix: String,

    /// Output directory
    pub output_dir: PathBuf,

    /// Extra subdirectories to pre-create under the output root
    pub extra_dirs: Vec<PathBuf>,

    /// Skip templates whose file name starts with `_`
    pub skip_partials: bool,

    /// External stylesheet compiler settings
    pub stylesheet: StylesheetConfig,

    /// Files copied verbatim into the output tree
    pub assets: Vec<AssetMapping>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            template_suffix: ".jinja".to_string(),
            output_dir: PathBuf::from("static"),
            extra_dirs: vec![PathBuf::from("comments")],
            skip_partials: true,
            stylesheet: StylesheetConfig::default(),
            assets: vec![AssetMapping {
                source: PathBuf::from("src/main.js"),
                dest: PathBuf::from("main.js"),
            }],
        }
    }
}

/// External stylesheet compiler invocation.
#[derive(Debug, Clone)]
pub struct StylesheetConfig {
    /// Compiler executable name
    pub compiler: String,

    /// Stylesheet source path
    pub input: PathBuf,

    /// Artifact path, relative to the output root
    pub output: PathBuf,

    /// Fail the build when the compiler exits non-zero or cannot be run
    pub strict: bool,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            compiler: "sass".to_string(),
            input: PathBuf::from("src/style.scss"),
            output: PathBuf::from("style.css"),
            strict: false,
        }
    }
}

/// A file copied byte-for-byte into the output tree.
#[derive(Debug, Clone)]
pub struct AssetMapping {
    /// Source file path
    pub source: PathBuf,

    /// Destination path, relative to the output root
    pub dest: PathBuf,
}
