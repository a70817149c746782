//! Site initialization module.
//!
//! Writes a starter configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::DocumentFormat, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use validate::InitMode;

/// Write a starter configuration
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the directory (`docsite init <name>` only)
/// 3. Write the configuration file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(cwd: &Path, name: Option<&Path>, config_name: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    if DocumentFormat::from_path(config_name) != DocumentFormat::Toml {
        bail!(
            "'{}' is not a TOML file; `docsite init` writes TOML.",
            config_name.display()
        );
    }

    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd.to_path_buf(), InitMode::CurrentDir),
    };

    validate::validate_target(&root, config_name, mode)?;

    if matches!(mode, InitMode::NewDir) {
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    config::write_config(&root, config_name)?;

    log!("init"; "wrote {}", root.join(config_name).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_in_subdirectory() {
        let temp = TempDir::new().unwrap();
        new_site(
            temp.path(),
            Some(Path::new("my-docs")),
            Path::new("docsite.toml"),
            false,
        )
        .unwrap();

        let path = temp.path().join("my-docs/docsite.toml");
        assert!(SiteConfig::load(&path).is_ok());
    }

    #[test]
    fn test_new_site_refuses_existing_config() {
        let temp = TempDir::new().unwrap();
        new_site(temp.path(), None, Path::new("docsite.toml"), false).unwrap();
        assert!(new_site(temp.path(), None, Path::new("docsite.toml"), false).is_err());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        new_site(
            temp.path(),
            Some(Path::new("my-docs")),
            Path::new("docsite.toml"),
            true,
        )
        .unwrap();

        assert!(!temp.path().join("my-docs").exists());
        assert!(!temp.path().join("docsite.toml").exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_new_site_rejects_json_name() {
        let temp = TempDir::new().unwrap();
        assert!(new_site(temp.path(), None, Path::new("site.json"), false).is_err());
        assert!(!temp.path().join("site.json").exists());
    }
}
