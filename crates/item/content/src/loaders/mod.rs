//! Content loaders for reading item option data from files.
//!
//! Loaders convert RON catalog files into entries on a
//! [`item_core::MetadataSnapshot`].

pub mod factory;
pub mod options;
pub mod ranges;

pub use factory::ContentFactory;
pub use options::{ItemOptionCatalog, ItemOptionLoader};
pub use ranges::{RangeCatalog, RangeTableLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
