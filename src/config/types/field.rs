//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::{borrow::Cow, fmt};

/// Path of a field inside the configuration document.
///
/// Static paths for top-level fields are exposed as constants
/// (see `SiteConfig::FIELDS`); nested paths are built with [`key`] and
/// [`index`] while walking the document.
///
/// # Example
///
/// ```ignore
/// let path = SiteConfig::FIELDS.sidebar.index(0).key("items").index(2);
/// assert_eq!(path.as_str(), "sidebar[0].items[2]");
/// ```
///
/// [`key`]: FieldPath::key
/// [`index`]: FieldPath::index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Document root (empty path).
    #[inline]
    pub const fn root() -> Self {
        Self::new("")
    }

    /// Child field `key` of this path.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(Cow::Owned(key.to_string()))
        } else {
            Self(Cow::Owned(format!("{}.{}", self.0, key)))
        }
    }

    /// Element `index` of the sequence at this path.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last key segment (`locales.bg.label` → `label`).
    pub fn last_key(&self) -> &str {
        let tail = self.0.rsplit('.').next().unwrap_or_default();
        tail.split('[').next().unwrap_or_default()
    }

    /// Convert a path reported by `serde_ignored` into a field path.
    pub fn from_ignored(path: &serde_ignored::Path<'_>) -> Self {
        use serde_ignored::Path;

        match path {
            Path::Root => Self::root(),
            Path::Seq { parent, index } => Self::from_ignored(parent).index(*index),
            Path::Map { parent, key } => Self::from_ignored(parent).key(key),
            Path::Some { parent }
            | Path::NewtypeStruct { parent }
            | Path::NewtypeVariant { parent } => Self::from_ignored(parent),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
