//! Configuration file generation.
//!
//! Creates a commented docsite.toml for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::RECOGNIZED_OPTIONS;

/// Body of the starter configuration.
const TEMPLATE_BODY: &str = r#"# Site title shown in the header and browser tab.
title = "My Docs"

# Logo next to the title (optional).
# logo = { src = "./src/assets/logo.svg" }

# Extra stylesheets applied on top of the theme (optional).
# customCss = ["./src/styles/custom.css"]

# Locale used when none is requested. Defaults to the root locale.
defaultLocale = "root"

# Language variants, in display order.
# Exactly one locale sets `lang`: that one is the root locale.
[locales.root]
label = "English"
lang = "en"

# [locales.bg]
# label = "Bulgarian"

# Platform name to profile URL (optional).
[social]
github = "https://github.com/withastro/starlight"

# Sidebar groups, in display order.
# Each item takes its entries from `autogenerate = { directory = "..." }`
# or from `links = [{ label = "...", url = "..." }]`.
[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Getting started"
autogenerate = { directory = "guides" }

[[sidebar.items]]
label = "Resources"
links = [{ label = "Starlight", url = "https://starlight.astro.build" }]
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("# Options: {}\n\n", RECOGNIZED_OPTIONS.join(", ")));

    out.push_str(TEMPLATE_BODY);
    out
}

/// Write the starter configuration to `root/config_name`.
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PartialSiteConfig, SiteConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_resolves() {
        let document = PartialSiteConfig::from_toml_str(&generate_config_template()).unwrap();
        assert!(document.unknown.is_empty(), "{:?}", document.unknown);

        let config = document.resolve().unwrap();
        assert_eq!(config.title, "My Docs");
        assert_eq!(config.default_locale, "root");
        assert_eq!(config.sidebar_item_count(), 2);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), Path::new("docsite.toml")).unwrap();

        let config_path = temp.path().join("docsite.toml");
        let config = SiteConfig::load(&config_path).unwrap();
        assert_eq!(config.locales.len(), 1);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.starts_with("# docsite configuration file"));
    }
}
