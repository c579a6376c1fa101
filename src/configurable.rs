use std::path::{Path, PathBuf};

use crate::document::Document;

/// A configuration type that can be loaded from its own file.
///
/// Implementors are registered by hand: `from_document` reads each field
/// with [`read_value`](crate::read_value) against the type's default
/// instance. It must not fail; a field that is missing or of the wrong type
/// simply keeps its default.
///
/// ```ignore
/// impl Configurable for CacheConfig {
///     const NAME: &'static str = "cache.config";
///
///     fn from_document(document: &Document) -> Self {
///         let default = Self::default();
///         Self {
///             capacity: read_value(document.node("capacity"), default.capacity),
///         }
///     }
/// }
/// ```
pub trait Configurable: Sized {
    /// File name of this configuration inside its base directory.
    const NAME: &'static str;

    /// Build a fully populated value from a parsed document.
    fn from_document(document: &Document) -> Self;

    /// Path of this configuration's file inside `dir`.
    fn path_in(dir: &Path) -> PathBuf {
        dir.join(Self::NAME)
    }
}
