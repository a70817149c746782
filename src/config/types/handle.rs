//! Global, read-only handle to the resolved configuration.
//!
//! The configuration is resolved once at startup and never replaced
//! afterwards; a changed document needs a new process.

use crate::config::SiteConfig;
use anyhow::{Result, bail};
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Resolved configuration, if `init_config` has run.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

/// Store the resolved configuration for the rest of the process.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>> {
    let arc = Arc::new(config);
    if CONFIG.set(Arc::clone(&arc)).is_err() {
        bail!("configuration is already initialized");
    }
    Ok(arc)
}
