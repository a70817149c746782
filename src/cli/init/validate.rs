//! Pre-initialization validation.
//!
//! Validates target directory state before writing the config.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `docsite init` - write into current directory (no config there yet)
    CurrentDir,
    /// `docsite init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: `config_name` must not exist yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let config_path = root.join(config_name);
            if config_path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `docsite init <name>` to create in a new subdirectory.",
                    config_path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = "docsite.toml";

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_unrelated_files_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG), "title = \"Docs\"").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, Path::new(CONFIG), InitMode::NewDir).is_ok());
    }
}
