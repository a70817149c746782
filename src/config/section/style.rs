//! `customCss`: extra stylesheets applied on top of the theme.
//!
//! # Example
//!
//! ```toml
//! customCss = ["./src/styles/sidebar.css"]
//! ```

use crate::config::{ConfigDiagnostics, ResolveError, SiteConfig};

/// Validate custom stylesheet paths, keeping their order.
pub fn resolve_custom_css(raw: Option<&[String]>, diag: &mut ConfigDiagnostics) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut styles = Vec::with_capacity(raw.len());
    for (i, path) in raw.iter().enumerate() {
        if path.trim().is_empty() {
            diag.error(ResolveError::InvalidValue {
                field: SiteConfig::FIELDS.custom_css.index(i),
                reason: "stylesheet path must not be empty".into(),
            });
        } else {
            styles.push(path.clone());
        }
    }
    styles
}
