//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that `value` is an absolute URL with a host.
///
/// Uses `url` crate for parsing, so relative references (`/guide`,
/// `github.com/user`) are rejected while ports, auth info, queries and
/// fragments are accepted.
///
/// # Examples
/// ```ignore
/// check_absolute_url("https://github.com/withastro")   -> Ok(())
/// check_absolute_url("https://example.com:8080/path")  -> Ok(())
/// check_absolute_url("github.com/withastro")           -> Err("invalid URL: ...")
/// check_absolute_url("mailto:me@example.com")          -> Err("URL must have a host")
/// ```
pub fn check_absolute_url(value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err("URL must have a host".to_string());
    }
    Ok(())
}

/// Check a sidebar link target: absolute URL or site-relative path.
pub fn check_link_target(value: &str) -> Result<(), String> {
    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }
    check_absolute_url(value)
        .map_err(|e| format!("{e} (use an absolute URL or a path starting with `/`)"))
}

/// Loose IETF language tag check (`en`, `pt-BR`, `zh-Hant-TW`).
///
/// Subtags are 1-8 ASCII alphanumerics joined by `-`; the primary subtag
/// is alphabetic, and a one-letter primary subtag is only `x` (private use)
/// or `i` (grandfathered tags like `i-klingon`).
pub fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags.next().is_some_and(|s| match s.len() {
        1 => s.eq_ignore_ascii_case("x") || s.eq_ignore_ascii_case("i"),
        2..=8 => s.bytes().all(|b| b.is_ascii_alphabetic()),
        _ => false,
    });

    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/docs/src/content/  ← start
/// /home/user/docs/docsite.toml  ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
