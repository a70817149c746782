//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ResolveError
// ============================================================================

/// A single reason why a document does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{field} is required")]
    MissingRequiredField { field: FieldPath },

    #[error("unknown option `{key}`")]
    UnknownOption { field: FieldPath, key: String },

    #[error("{field} refers to `{target}`, which is not defined")]
    InvalidReference { field: FieldPath, target: String },

    #[error("exactly one locale must set `lang` (the root locale), found {}", describe_roots(.roots))]
    AmbiguousRootLocale { field: FieldPath, roots: Vec<String> },

    #[error("invalid sidebar item {field}: {reason}")]
    InvalidSidebarItem { field: FieldPath, reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: FieldPath, reason: String },
}

fn describe_roots(roots: &[String]) -> String {
    if roots.is_empty() {
        "none".to_string()
    } else {
        roots
            .iter()
            .map(|key| format!("`{key}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ResolveError {
    /// Path of the offending field.
    pub fn field(&self) -> &FieldPath {
        match self {
            Self::MissingRequiredField { field }
            | Self::UnknownOption { field, .. }
            | Self::InvalidReference { field, .. }
            | Self::AmbiguousRootLocale { field, .. }
            | Self::InvalidSidebarItem { field, .. }
            | Self::InvalidValue { field, .. } => field,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub error: ResolveError,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(error: ResolveError) -> Self {
        Self { error, hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.error.field();
        let field = if field.is_root() { "<root>" } else { field.as_str() };
        // Field path in cyan brackets
        writeln!(f, "{}{}{}", "[".dimmed(), field.cyan(), "]".dimmed())?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.error)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Every problem found in one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ResolveError) {
        self.errors.push(ConfigDiagnostic::new(error));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, error: ResolveError, hint: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(error).with_hint(hint));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Iterate over the bare error kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &ResolveError> {
        self.errors.iter().map(|diag| &diag.error)
    }

    /// First reported error, if any.
    pub fn first(&self) -> Option<&ResolveError> {
        self.kinds().next()
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));
    }

    #[test]
    fn test_resolve_error_messages() {
        let err = ResolveError::UnknownOption {
            field: FieldPath::new("typoOption"),
            key: "typoOption".into(),
        };
        assert_eq!(err.to_string(), "unknown option `typoOption`");

        let err = ResolveError::AmbiguousRootLocale {
            field: FieldPath::new("locales"),
            roots: vec!["root".into(), "bg".into()],
        };
        assert!(err.to_string().ends_with("found `root`, `bg`"));

        let err = ResolveError::AmbiguousRootLocale {
            field: FieldPath::new("locales"),
            roots: Vec::new(),
        };
        assert!(err.to_string().ends_with("found none"));
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(ResolveError::MissingRequiredField {
            field: FieldPath::new("title"),
        });
        diag.error_with_hint(
            ResolveError::InvalidReference {
                field: FieldPath::new("defaultLocale"),
                target: "fr".into(),
            },
            "use one of: root",
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.first().map(|e| e.field().as_str()), Some("title"));
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use one of: root"));

        let display = diag.to_string();
        assert!(display.contains("config validation failed"));
        assert!(display.contains("defaultLocale"));
        assert!(display.contains("use one of: root"));
    }
}
