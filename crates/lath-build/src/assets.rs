//! Verbatim asset copies into the output tree.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;
use crate::config::AssetMapping;

/// Copy each configured asset into the output tree, overwriting any existing
/// destination. `fs::copy` carries permission bits along with the contents.
pub fn copy_assets(mappings: &[AssetMapping], output_root: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;

    for mapping in mappings {
        let dest = output_root.join(&mapping.dest);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::copy(&mapping.source, &dest).map_err(|e| {
            BuildError::WriteError(format!(
                "{} -> {}: {}",
                mapping.source.display(),
                dest.display(),
                e
            ))
        })?;

        tracing::debug!("Copied {} -> {}", mapping.source.display(), dest.display());
        copied += 1;
    }

    Ok(copied)
}
