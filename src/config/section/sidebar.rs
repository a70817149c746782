//! `sidebar` configuration.
//!
//! The sidebar is an ordered list of labeled groups. Every item in a group
//! takes its children from exactly one source: a content directory
//! (`autogenerate`) or an explicit list of links (`links`).
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! label = "TypeScript"
//!
//! [[sidebar.items]]
//! label = "Introduction"
//! autogenerate = { directory = "typescript/introduction" }
//!
//! [[sidebar.items]]
//! label = "Further reading"
//! links = [
//!     { label = "Handbook", url = "https://www.typescriptlang.org/docs/handbook/" },
//!     { label = "Setup", url = "/typescript/setup" },
//! ]
//! ```

use crate::config::{
    ConfigDiagnostics, FieldPath, ResolveError, SiteConfig, util::check_link_target,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Document shape
// ============================================================================

/// Sidebar group as written in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSidebarGroup {
    pub label: Option<String>,
    pub items: Option<Vec<RawSidebarItem>>,
}

/// Sidebar item as written in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSidebarItem {
    pub label: Option<String>,
    pub autogenerate: Option<RawAutogenerate>,
    pub links: Option<Vec<RawSidebarLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAutogenerate {
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSidebarLink {
    pub label: Option<String>,
    pub url: Option<String>,
}

// ============================================================================
// Resolved shape
// ============================================================================

/// A labeled group of navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub label: String,
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub label: String,
    #[serde(flatten)]
    pub source: SidebarSource,
}

/// Where a sidebar item gets its entries from.
///
/// Serialized under the same keys the document uses (`autogenerate`,
/// `links`), so resolved output can be read back as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SidebarSource {
    /// Entries derived from a content directory.
    #[serde(rename = "autogenerate")]
    Autogenerate { directory: String },

    /// Entries listed by hand.
    #[serde(rename = "links")]
    ExplicitList(Vec<SidebarLink>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub label: String,
    pub url: String,
}

impl SidebarGroup {
    /// Content directories referenced by `autogenerate` items.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match &item.source {
            SidebarSource::Autogenerate { directory } => Some(directory.as_str()),
            SidebarSource::ExplicitList(_) => None,
        })
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate every sidebar group, reporting problems by path
/// (e.g. `sidebar[0].items[1].autogenerate.directory`).
pub fn resolve_sidebar(
    raw: Option<&[RawSidebarGroup]>,
    diag: &mut ConfigDiagnostics,
) -> Vec<SidebarGroup> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .enumerate()
        .filter_map(|(i, group)| group.resolve(&SiteConfig::FIELDS.sidebar.index(i), diag))
        .collect()
}

/// Record an `InvalidSidebarItem` error.
fn invalid(diag: &mut ConfigDiagnostics, field: FieldPath, reason: impl Into<String>) {
    diag.error(ResolveError::InvalidSidebarItem {
        field,
        reason: reason.into(),
    });
}

/// Non-blank string or `None`.
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl RawSidebarGroup {
    fn resolve(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Option<SidebarGroup> {
        let label = non_blank(self.label.as_ref());
        if label.is_none() {
            invalid(diag, field.key("label"), "group label is required");
        }

        let items_field = field.key("items");
        let raw_items = match self.items.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => {
                invalid(diag, items_field, "group must contain at least one item");
                return None;
            }
        };

        let items: Vec<SidebarItem> = raw_items
            .iter()
            .enumerate()
            .filter_map(|(j, item)| item.resolve(&items_field.index(j), diag))
            .collect();

        // Drop the group if any item was rejected.
        if items.len() != raw_items.len() {
            return None;
        }

        Some(SidebarGroup {
            label: label?.to_string(),
            items,
        })
    }
}

impl RawSidebarItem {
    fn resolve(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Option<SidebarItem> {
        let label = non_blank(self.label.as_ref());
        if label.is_none() {
            invalid(diag, field.key("label"), "item label is required");
        }

        let source = match (&self.autogenerate, &self.links) {
            (Some(auto), None) => auto.resolve(&field.key("autogenerate"), diag),
            (None, Some(links)) => resolve_links(links, &field.key("links"), diag),
            (Some(_), Some(_)) => {
                invalid(
                    diag,
                    field.clone(),
                    "item sets both `autogenerate` and `links`, only one source is allowed",
                );
                None
            }
            (None, None) => {
                invalid(
                    diag,
                    field.clone(),
                    "item needs a source: `autogenerate` or `links`",
                );
                None
            }
        };

        Some(SidebarItem {
            label: label?.to_string(),
            source: source?,
        })
    }
}

impl RawAutogenerate {
    fn resolve(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Option<SidebarSource> {
        match non_blank(self.directory.as_ref()) {
            Some(directory) => Some(SidebarSource::Autogenerate {
                directory: directory.to_string(),
            }),
            None => {
                invalid(diag, field.key("directory"), "directory must not be empty");
                None
            }
        }
    }
}

fn resolve_links(
    raw: &[RawSidebarLink],
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<SidebarSource> {
    if raw.is_empty() {
        invalid(diag, field.clone(), "link list must contain at least one entry");
        return None;
    }

    let mut links = Vec::with_capacity(raw.len());
    let mut complete = true;

    for (k, link) in raw.iter().enumerate() {
        let link_field = field.index(k);

        let label = non_blank(link.label.as_ref());
        if label.is_none() {
            invalid(diag, link_field.key("label"), "link label is required");
        }

        let url = match non_blank(link.url.as_ref()) {
            None => {
                invalid(diag, link_field.key("url"), "link url is required");
                None
            }
            Some(url) => match check_link_target(url) {
                Ok(()) => Some(url),
                Err(reason) => {
                    invalid(diag, link_field.key("url"), reason);
                    None
                }
            },
        };

        match (label, url) {
            (Some(label), Some(url)) => links.push(SidebarLink {
                label: label.to_string(),
                url: url.to_string(),
            }),
            _ => complete = false,
        }
    }

    complete.then_some(SidebarSource::ExplicitList(links))
}
