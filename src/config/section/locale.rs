//! `locales` and `defaultLocale` configuration.
//!
//! Exactly one locale carries `lang`: that entry is the root locale, used
//! as fallback for untranslated pages. Table order is display order.
//!
//! # Example
//!
//! ```toml
//! defaultLocale = "root"
//!
//! [locales.root]
//! label = "English"
//! lang = "en"
//!
//! [locales.bg]
//! label = "Bulgarian"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, ResolveError, SiteConfig, util::is_language_tag};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Locale entry as written in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocaleEntry {
    pub label: Option<String>,
    pub lang: Option<String>,
}

/// A language variant of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    /// Name shown in the language picker.
    pub label: String,

    /// IETF language tag, set on the root locale only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl LocaleEntry {
    /// Whether this entry is the root locale.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.lang.is_some()
    }
}

/// Resolved locale table together with the default locale key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocales {
    pub default_locale: String,
    pub locales: IndexMap<String, LocaleEntry>,
}

/// Validate `locales` and `defaultLocale`.
///
/// # Checks
/// - `locales` has at least one entry, each with a non-empty `label`
/// - exactly one entry sets `lang`, and it is a plausible language tag
/// - `defaultLocale` names an existing entry; when absent the root entry
///   is used
pub fn resolve_locales(
    raw: Option<&IndexMap<String, RawLocaleEntry>>,
    default_locale: Option<&str>,
    diag: &mut ConfigDiagnostics,
) -> Option<ResolvedLocales> {
    let field = SiteConfig::FIELDS.locales;

    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            diag.error_with_hint(
                ResolveError::MissingRequiredField { field },
                "add at least one locale, e.g.: [locales.root] label = \"English\", lang = \"en\"",
            );
            return None;
        }
    };

    let mut locales = IndexMap::with_capacity(raw.len());
    let mut complete = true;

    for (key, entry) in raw {
        let entry_field = field.key(key);

        let label = match entry.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label.to_string(),
            _ => {
                diag.error(ResolveError::MissingRequiredField {
                    field: entry_field.key("label"),
                });
                complete = false;
                continue;
            }
        };

        if let Some(lang) = entry.lang.as_deref()
            && !is_language_tag(lang)
        {
            diag.error_with_hint(
                ResolveError::InvalidValue {
                    field: entry_field.key("lang"),
                    reason: format!("`{lang}` is not a valid IETF language tag"),
                },
                "use a tag like \"en\", \"bg\" or \"pt-BR\"",
            );
            complete = false;
        }

        locales.insert(
            key.clone(),
            LocaleEntry {
                label,
                lang: entry.lang.clone(),
            },
        );
    }

    // Root detection looks at the raw table so that an entry with a missing
    // label still counts as a `lang` holder.
    let roots: Vec<String> = raw
        .iter()
        .filter(|(_, entry)| entry.lang.is_some())
        .map(|(key, _)| key.clone())
        .collect();

    let root = match roots.as_slice() {
        [root] => Some(root.clone()),
        _ => {
            let hint = if roots.is_empty() {
                "set `lang` on the root locale, e.g.: lang = \"en\""
            } else {
                "keep `lang` on the root locale only"
            };
            diag.error_with_hint(
                ResolveError::AmbiguousRootLocale {
                    field: SiteConfig::FIELDS.locales,
                    roots,
                },
                hint,
            );
            complete = false;
            None
        }
    };

    let default_locale = match default_locale {
        Some(key) if raw.contains_key(key) => Some(key.to_string()),
        Some(key) => {
            let known: Vec<&str> = raw.keys().map(String::as_str).collect();
            diag.error_with_hint(
                ResolveError::InvalidReference {
                    field: SiteConfig::FIELDS.default_locale,
                    target: key.to_string(),
                },
                format!("expected one of: {}", known.join(", ")),
            );
            None
        }
        None => root,
    };

    match default_locale {
        Some(default_locale) if complete => Some(ResolvedLocales {
            default_locale,
            locales,
        }),
        _ => None,
    }
}
