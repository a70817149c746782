//! Helpers shared by subcommands.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::find_config_file;

/// Locate the config file, searching upward from `cwd`.
pub fn locate_config(cwd: &Path, config_name: &Path) -> Result<PathBuf> {
    match find_config_file(cwd, config_name) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found. Run 'docsite init' to create a new project.",
            config_name.display()
        ),
    }
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{content}\n"))
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_config_missing() {
        let temp = TempDir::new().unwrap();
        let err = locate_config(temp.path(), Path::new("no-such-docsite.toml")).unwrap_err();
        assert!(err.to_string().contains("docsite init"));
    }

    #[test]
    fn test_locate_config_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docsite.toml"), "").unwrap();
        let path = locate_config(temp.path(), Path::new("docsite.toml")).unwrap();
        assert_eq!(path, temp.path().join("docsite.toml"));
    }

    #[test]
    fn test_write_output_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        write_output("{}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
