//! One-shot static site builder.
//!
//! Renders a tree of templates into an output directory, shells out to an
//! external stylesheet compiler, and copies script assets verbatim. One
//! invocation performs one full rebuild; the output tree is disposable and
//! fully reproducible from source.

pub mod assets;
pub mod builder;
pub mod config;
pub mod stylesheet;
pub mod templates;

pub use builder::{BuildError, BuildResult, SiteBuilder};
pub use config::{AssetMapping, BuildConfig, StylesheetConfig};
