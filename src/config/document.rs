//! Configuration document as written by the user.
//!
//! Every field is optional here; `resolve` decides what is required and
//! fills in defaults. Keys the schema does not know are recorded while
//! deserializing, so they can be rejected instead of silently ignored.

use super::{
    ConfigError, FieldPath,
    section::{RawLocaleEntry, RawLogo, RawSidebarGroup},
};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, path::Path};

/// Partially specified site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSiteConfig {
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    pub custom_css: Option<Vec<String>>,
    pub default_locale: Option<String>,
    pub locales: Option<IndexMap<String, RawLocaleEntry>>,
    pub social: Option<IndexMap<String, String>>,
    pub sidebar: Option<Vec<RawSidebarGroup>>,

    /// Unrecognized keys found while parsing, in document order.
    #[serde(skip)]
    pub unknown: Vec<FieldPath>,
}

/// Document format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// `.json` is JSON, everything else TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl PartialSiteConfig {
    /// Parse a TOML document, collecting any unknown fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut unknown = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let mut document: Self =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                unknown.push(FieldPath::from_ignored(&path));
            })?;
        document.unknown = unknown;
        Ok(document)
    }

    /// Parse a JSON document, collecting any unknown fields.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let mut unknown = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let mut document: Self =
            serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                unknown.push(FieldPath::from_ignored(&path));
            })?;
        deserializer.end()?;
        document.unknown = unknown;
        Ok(document)
    }

    /// Parse `content` in the given format.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        match format {
            DocumentFormat::Toml => Self::from_toml_str(content),
            DocumentFormat::Json => Self::from_json_str(content),
        }
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content, DocumentFormat::from_path(path))
    }
}

// ============================================================================
// tests
// ============================================================================
