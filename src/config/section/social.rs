//! `social` configuration: platform name to profile URL.
//!
//! # Example
//!
//! ```toml
//! [social]
//! github = "https://github.com/withastro/starlight"
//! discord = "https://astro.build/chat"
//! ```

use crate::config::{ConfigDiagnostics, ResolveError, SiteConfig, util::check_absolute_url};
use indexmap::IndexMap;

/// Validate social links; every value must be an absolute URL.
pub fn resolve_social(
    raw: Option<&IndexMap<String, String>>,
    diag: &mut ConfigDiagnostics,
) -> IndexMap<String, String> {
    let Some(raw) = raw else {
        return IndexMap::new();
    };

    let mut social = IndexMap::with_capacity(raw.len());
    for (platform, url) in raw {
        match check_absolute_url(url) {
            Ok(()) => {
                social.insert(platform.clone(), url.clone());
            }
            Err(reason) => diag.error_with_hint(
                ResolveError::InvalidValue {
                    field: SiteConfig::FIELDS.social.key(platform),
                    reason,
                },
                "use format like https://github.com/user",
            ),
        }
    }
    social
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldPath, PartialSiteConfig, test_parse_config};

    #[test]
    fn test_social_defaults_to_empty() {
        let config = test_parse_config("");
        assert!(config.social.is_empty());
    }

    #[test]
    fn test_social_keeps_order() {
        let config = test_parse_config(
            "[social]\ngithub = \"https://github.com/withastro\"\nmastodon = \"https://m.webtoo.ls/@astro\"",
        );
        let platforms: Vec<&str> = config.social.keys().map(String::as_str).collect();
        assert_eq!(platforms, ["github", "mastodon"]);
        assert_eq!(config.social["github"], "https://github.com/withastro");
    }

    #[test]
    fn test_social_rejects_relative_url() {
        let content = "title = \"Docs\"\n[locales.root]\nlabel = \"English\"\nlang = \"en\"\n[social]\ngithub = \"github.com/withastro\"\nx = \"https://x.com/astrodotbuild\"";
        let diag = PartialSiteConfig::from_toml_str(content)
            .unwrap()
            .resolve()
            .unwrap_err();

        assert_eq!(diag.len(), 1);
        assert!(matches!(
            diag.first(),
            Some(ResolveError::InvalidValue { field, .. }) if *field == FieldPath::new("social.github")
        ));
    }
}
