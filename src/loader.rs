//! Loading configuration files from a base directory.
//!
//! Three entry points, from most to least informative:
//!
//! - [`load`] returns a `Result` that says why loading failed.
//! - [`try_read`] returns `None` on any failure. A missing file and an
//!   unparseable one look the same.
//! - [`read`] panics on any failure. Use it for configs the process cannot
//!   start without.
//!
//! Individual fields never cause a failure; see [`read_value`](crate::read_value).

use std::path::Path;

use crate::configurable::Configurable;
use crate::document::Document;
use crate::error::ConfigError;

/// Parse `contents` and build `C` from it. No I/O happens here.
///
/// `path` only labels errors.
pub fn load_str<C: Configurable>(contents: &str, path: &Path) -> Result<C, ConfigError> {
    let document = Document::parse(contents, path)?;
    Ok(C::from_document(&document))
}

/// Read `{dir}/{C::NAME}` and build `C` from it.
pub fn load<C: Configurable>(dir: &Path) -> Result<C, ConfigError> {
    let path = C::path_in(dir);
    tracing::debug!(path = %path.display(), "loading config");

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let config = load_str(&contents, &path)?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Like [`load`], but any failure becomes `None`.
pub fn try_read<C: Configurable>(dir: &Path) -> Option<C> {
    match load(dir) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(config = C::NAME, error = %e, "failed to load config");
            None
        }
    }
}

/// Like [`load`], but panics on failure.
///
/// # Panics
///
/// If the file is missing, unreadable, empty or not a valid document.
pub fn read<C: Configurable>(dir: &Path) -> C {
    load(dir).unwrap_or_else(|e| {
        panic!(
            "failed to read config {}: {e}",
            C::path_in(dir).display()
        )
    })
}
