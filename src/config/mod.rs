//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Per-key schema and validation
//! │   ├── locale     # locales, defaultLocale
//! │   ├── logo       # logo
//! │   ├── sidebar    # sidebar
//! │   ├── social     # social
//! │   └── style      # customCss
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ResolveError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── document.rs    # PartialSiteConfig (as written by the user)
//! └── mod.rs         # SiteConfig, resolve (this file)
//! ```
//!
//! # Keys
//!
//! | Key             | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `title`         | Site title (required)                         |
//! | `logo`          | Logo image (`{ src }`)                        |
//! | `customCss`     | Extra stylesheets                             |
//! | `defaultLocale` | Locale used when none is requested            |
//! | `locales`       | Language variants (required, one root)        |
//! | `social`        | Platform name to profile URL                  |
//! | `sidebar`       | Navigation groups                             |

mod document;
pub mod section;
pub mod types;
mod util;

pub use document::{DocumentFormat, PartialSiteConfig};
pub use section::{LocaleEntry, LogoConfig, SidebarGroup, SidebarItem, SidebarLink, SidebarSource};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, ResolveError, cfg, init_config,
};
pub use util::find_config_file;

use crate::debug;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ============================================================================
// root configuration
// ============================================================================

/// Fully resolved site configuration, handed as-is to the site generator.
///
/// Only produced by [`resolve`], so every value satisfies the schema
/// invariants: the default locale exists, exactly one root locale, social
/// links are absolute URLs, and every sidebar item has a valid source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Path of the file this configuration was loaded from (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    pub title: String,

    pub logo: Option<LogoConfig>,

    pub custom_css: Vec<String>,

    pub default_locale: String,

    /// Locale entries in display order.
    pub locales: IndexMap<String, LocaleEntry>,

    pub social: IndexMap<String, String>,

    pub sidebar: Vec<SidebarGroup>,
}

/// Top-level field paths for diagnostic messages.
pub struct SiteConfigFields {
    pub title: FieldPath,
    pub logo: FieldPath,
    pub custom_css: FieldPath,
    pub default_locale: FieldPath,
    pub locales: FieldPath,
    pub social: FieldPath,
    pub sidebar: FieldPath,
}

/// Every top-level key a document may contain.
pub const RECOGNIZED_OPTIONS: &[&str] = &[
    "title",
    "logo",
    "customCss",
    "defaultLocale",
    "locales",
    "social",
    "sidebar",
];

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        title: FieldPath::new("title"),
        logo: FieldPath::new("logo"),
        custom_css: FieldPath::new("customCss"),
        default_locale: FieldPath::new("defaultLocale"),
        locales: FieldPath::new("locales"),
        social: FieldPath::new("social"),
        sidebar: FieldPath::new("sidebar"),
    };

    /// Load, parse and resolve the document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("load"; "reading {}", path.display());
        let document = PartialSiteConfig::from_path(path)?;

        let mut config = resolve(&document).map_err(ConfigError::Diagnostics)?;
        config.config_path = path.to_path_buf();

        debug!(
            "load"; "resolved `{}`: {} locale(s), {} sidebar group(s)",
            config.title, config.locales.len(), config.sidebar.len()
        );
        Ok(config)
    }

    /// The root locale (the one carrying `lang`).
    pub fn root_locale(&self) -> Option<(&str, &LocaleEntry)> {
        self.locales
            .iter()
            .find(|(_, entry)| entry.is_root())
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// The entry `defaultLocale` points to.
    pub fn default_locale_entry(&self) -> Option<&LocaleEntry> {
        self.locales.get(self.default_locale.as_str())
    }

    /// Total number of sidebar items across all groups.
    pub fn sidebar_item_count(&self) -> usize {
        self.sidebar.iter().map(|group| group.items.len()).sum()
    }

    /// Serialize as JSON, using the same keys a document uses.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl PartialSiteConfig {
    /// Shorthand for [`resolve`].
    pub fn resolve(&self) -> Result<SiteConfig, ConfigDiagnostics> {
        resolve(self)
    }
}

// ============================================================================
// resolution
// ============================================================================

/// Validate a document and fill in defaults.
///
/// Pure: no I/O, the input is only borrowed. All problems are collected
/// and returned together; on success every invariant holds.
///
/// # Defaults
/// - `logo`: none
/// - `customCss`, `social`, `sidebar`: empty
/// - `defaultLocale`: key of the root locale
pub fn resolve(raw: &PartialSiteConfig) -> Result<SiteConfig, ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();

    report_unknown_options(&raw.unknown, &mut diag);

    let title = match raw.title.as_deref() {
        Some(title) if !title.trim().is_empty() => Some(title.to_string()),
        _ => {
            diag.error_with_hint(
                ResolveError::MissingRequiredField {
                    field: SiteConfig::FIELDS.title,
                },
                "set the site title, e.g.: title = \"My Docs\"",
            );
            None
        }
    };

    let logo = raw
        .logo
        .as_ref()
        .map(|logo| logo.resolve(&SiteConfig::FIELDS.logo, &mut diag));

    let custom_css = section::resolve_custom_css(raw.custom_css.as_deref(), &mut diag);

    let locales = section::resolve_locales(
        raw.locales.as_ref(),
        raw.default_locale.as_deref(),
        &mut diag,
    );

    let social = section::resolve_social(raw.social.as_ref(), &mut diag);

    let sidebar = section::resolve_sidebar(raw.sidebar.as_deref(), &mut diag);

    // Sections only return `None` after reporting, so an empty
    // diagnostics list means every section resolved.
    match (title, locales) {
        (Some(title), Some(locales)) if diag.is_empty() => Ok(SiteConfig {
            config_path: PathBuf::new(),
            title,
            logo: logo.flatten(),
            custom_css,
            default_locale: locales.default_locale,
            locales: locales.locales,
            social,
            sidebar,
        }),
        _ => Err(diag),
    }
}

/// Reject keys the schema does not define.
fn report_unknown_options(unknown: &[FieldPath], diag: &mut ConfigDiagnostics) {
    for field in unknown {
        let key = field.last_key().to_string();
        let error = ResolveError::UnknownOption {
            field: field.clone(),
            key,
        };
        if field.as_str().contains(['.', '[']) {
            diag.error_with_hint(error, "remove this key or check its spelling");
        } else {
            diag.error_with_hint(
                error,
                format!("recognized options: {}", RECOGNIZED_OPTIONS.join(", ")),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Resolve a TOML document with the required fields filled in.
///
/// `extra` is inserted before the `[locales.root]` table, so it may hold
/// top-level keys as well as tables. Panics on unknown fields or
/// diagnostics (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content =
        format!("title = \"Test\"\n{extra}\n\n[locales.root]\nlabel = \"English\"\nlang = \"en\"\n");
    let document = PartialSiteConfig::from_toml_str(&content).unwrap();
    assert!(
        document.unknown.is_empty(),
        "test config has unknown fields: {:?}",
        document.unknown
    );
    match document.resolve() {
        Ok(config) => config,
        Err(diag) => panic!("test config does not resolve:\n{diag}"),
    }
}

// ============================================================================
// tests
// ============================================================================
