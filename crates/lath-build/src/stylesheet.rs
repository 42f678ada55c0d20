//! External stylesheet compiler invocation.

use std::path::Path;
use std::process::Command;

use crate::builder::BuildError;
use crate::config::StylesheetConfig;

/// Invoke the external compiler as `{compiler} {input}:{output}` (the sass
/// CLI's colon-joined source:destination convention) and wait for it.
///
/// Permissive by default: a missing compiler or non-zero exit is logged and
/// the build continues, so a site without a working stylesheet toolchain can
/// still render its pages. With `strict` set, either condition fails the
/// build.
pub fn compile(config: &StylesheetConfig, output_root: &Path) -> Result<(), BuildError> {
    let output_path = output_root.join(&config.output);
    let arg = format!("{}:{}", config.input.display(), output_path.display());

    tracing::debug!("Running {} {}", config.compiler, arg);

    match Command::new(&config.compiler).arg(&arg).status() {
        Ok(status) if status.success() => {
            tracing::info!(
                "Compiled {} -> {}",
                config.input.display(),
                output_path.display()
            );
            Ok(())
        }
        Ok(status) => {
            if config.strict {
                Err(BuildError::CompilerError(format!(
                    "{} exited with {}",
                    config.compiler, status
                )))
            } else {
                tracing::warn!("{} exited with {}; continuing", config.compiler, status);
                Ok(())
            }
        }
        Err(e) => {
            if config.strict {
                Err(BuildError::CompilerError(format!(
                    "failed to run {}: {}",
                    config.compiler, e
                )))
            } else {
                tracing::warn!("Failed to run {}: {}; continuing", config.compiler, e);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn config(compiler: &str, strict: bool) -> StylesheetConfig {
        StylesheetConfig {
            compiler: compiler.to_string(),
            strict,
            ..Default::default()
        }
    }

    #[test]
    fn permissive_tolerates_missing_compiler() {
        let temp = tempdir().unwrap();

        let result = compile(&config("lath-no-such-compiler", false), temp.path());

        assert!(result.is_ok());
    }

    #[test]
    fn strict_fails_on_missing_compiler() {
        let temp = tempdir().unwrap();

        let result = compile(&config("lath-no-such-compiler", true), temp.path());

        assert!(matches!(result, Err(BuildError::CompilerError(_))));
    }

    #[test]
    fn permissive_tolerates_nonzero_exit() {
        let temp = tempdir().unwrap();

        assert!(compile(&config("false", false), temp.path()).is_ok());
    }

    #[test]
    fn strict_fails_on_nonzero_exit() {
        let temp = tempdir().unwrap();

        let result = compile(&config("false", true), temp.path());

        assert!(matches!(result, Err(BuildError::CompilerError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn passes_colon_joined_paths_to_compiler() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let out = temp.path().join("static");
        fs::create_dir_all(&out).unwrap();

        // Fake compiler that writes to the destination half of its argument.
        let script = temp.path().join("fake-sass");
        fs::write(&script, "#!/bin/sh\nprintf 'compiled' > \"${1#*:}\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let config = StylesheetConfig {
            compiler: script.display().to_string(),
            input: temp.path().join("style.scss"),
            output: "style.css".into(),
            strict: true,
        };

        compile(&config, &out).unwrap();

        assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), "compiled");
    }
}
