//! `docsite check`: report a summary of a configuration that resolved.
//!
//! Diagnostics for a document that does not resolve are printed while
//! loading, before this command runs.

use anyhow::Result;

use crate::{config::SiteConfig, log};

/// Log a one-line summary per section.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

/// Summary lines for a resolved configuration.
fn summary(config: &SiteConfig) -> Vec<String> {
    let file = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());

    let root = config
        .root_locale()
        .map(|(key, entry)| format!("root `{}` ({})", key, entry.lang.as_deref().unwrap_or_default()))
        .unwrap_or_default();

    let default_label = config
        .default_locale_entry()
        .map(|entry| entry.label.as_str())
        .unwrap_or_default();

    let mut lines = vec![
        format!("{file} is valid"),
        format!("title: {}", config.title),
        format!(
            "locales: {} ({root}, default `{}` {default_label})",
            config.locales.len(),
            config.default_locale
        ),
        format!(
            "sidebar: {} group(s), {} item(s)",
            config.sidebar.len(),
            config.sidebar_item_count()
        ),
    ];
    let directories: Vec<&str> = config
        .sidebar
        .iter()
        .flat_map(|group| group.directories())
        .collect();
    if !directories.is_empty() {
        lines.push(format!("autogenerated from: {}", directories.join(", ")));
    }
    if !config.social.is_empty() {
        let platforms: Vec<&str> = config.social.keys().map(String::as_str).collect();
        lines.push(format!("social: {}", platforms.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary_lines() {
        let mut config = test_parse_config(
            "[social]\ngithub = \"https://github.com/x\"\n\n[[sidebar]]\nlabel = \"G\"\nitems = [{ label = \"a\", autogenerate = { directory = \"a\" } }]\n",
        );
        config.config_path = "/site/docsite.toml".into();

        let lines = summary(&config);
        assert_eq!(lines[0], "docsite.toml is valid");
        assert_eq!(lines[1], "title: Test");
        assert_eq!(lines[2], "locales: 1 (root `root` (en), default `root` English)");
        assert_eq!(lines[3], "sidebar: 1 group(s), 1 item(s)");
        assert_eq!(lines[4], "autogenerated from: a");
        assert_eq!(lines[5], "social: github");
    }

    #[test]
    fn test_summary_without_social() {
        let config = test_parse_config("");
        let lines = summary(&config);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "config is valid");
    }
}
