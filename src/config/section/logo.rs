//! `logo` configuration.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! src = "./src/assets/houston.webp"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, ResolveError};
use serde::{Deserialize, Serialize};

/// `logo` as written in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLogo {
    pub src: Option<String>,
}

/// Site logo shown next to the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoConfig {
    /// Image path, relative to the site root.
    pub src: String,
}

impl RawLogo {
    pub fn resolve(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Option<LogoConfig> {
        let src_field = field.key("src");
        match self.src.as_deref() {
            None => {
                diag.error_with_hint(
                    ResolveError::MissingRequiredField { field: src_field },
                    "set the image path, e.g.: src = \"./src/assets/logo.svg\"",
                );
                None
            }
            Some(src) if src.trim().is_empty() => {
                diag.error(ResolveError::InvalidValue {
                    field: src_field,
                    reason: "logo path must not be empty".into(),
                });
                None
            }
            Some(src) => Some(LogoConfig { src: src.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_logo_parsed() {
        let config = test_parse_config("[logo]\nsrc = \"./src/assets/houston.webp\"");
        assert_eq!(
            config.logo,
            Some(LogoConfig {
                src: "./src/assets/houston.webp".into()
            })
        );
    }

    #[test]
    fn test_logo_defaults_to_none() {
        let config = test_parse_config("");
        assert!(config.logo.is_none());
    }

    #[test]
    fn test_logo_without_src() {
        let mut diag = ConfigDiagnostics::new();
        let logo = RawLogo::default().resolve(&FieldPath::new("logo"), &mut diag);
        assert!(logo.is_none());
        assert_eq!(
            diag.first(),
            Some(&ResolveError::MissingRequiredField {
                field: FieldPath::new("logo.src")
            })
        );
    }

    #[test]
    fn test_logo_with_blank_src() {
        let mut diag = ConfigDiagnostics::new();
        let raw = RawLogo {
            src: Some("  ".into()),
        };
        assert!(raw.resolve(&FieldPath::new("logo"), &mut diag).is_none());
        assert!(matches!(
            diag.first(),
            Some(ResolveError::InvalidValue { field, .. }) if field.as_str() == "logo.src"
        ));
    }
}
