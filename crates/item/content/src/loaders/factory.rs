//! Content factory for building the metadata snapshot from data files.

use std::path::PathBuf;

use item_core::MetadataSnapshot;

use crate::loaders::{ItemOptionLoader, LoadResult, RangeTableLoader};

/// Content factory that loads all item option content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── item_options.ron
/// └── option_ranges.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn options_path(&self) -> PathBuf {
        self.data_dir.join("item_options.ron")
    }

    fn ranges_path(&self) -> PathBuf {
        self.data_dir.join("option_ranges.ron")
    }

    /// Build a complete metadata snapshot from the data directory.
    pub fn build_snapshot(&self) -> LoadResult<MetadataSnapshot> {
        let mut snapshot = MetadataSnapshot::new();

        let options = ItemOptionLoader::load(&self.options_path())?;
        ItemOptionLoader::apply(&options, &mut snapshot);
        tracing::debug!(
            items = options.items.len(),
            constant_options = options.constant_options.len(),
            static_options = options.static_options.len(),
            random_options = options.random_options.len(),
            "loaded item option catalog"
        );

        let ranges = RangeTableLoader::load(&self.ranges_path())?;
        RangeTableLoader::apply(&ranges, &mut snapshot)?;
        tracing::debug!(
            normal = ranges.normal.len(),
            special = ranges.special.len(),
            "loaded range table catalog"
        );

        Ok(snapshot)
    }
}

/// Build a snapshot straight from already-loaded catalogs (no file I/O).
pub fn build_snapshot_from_catalogs(
    options: &crate::loaders::ItemOptionCatalog,
    ranges: &crate::loaders::RangeCatalog,
) -> LoadResult<MetadataSnapshot> {
    let mut snapshot = MetadataSnapshot::new();
    ItemOptionLoader::apply(options, &mut snapshot);
    RangeTableLoader::apply(ranges, &mut snapshot)?;
    Ok(snapshot)
}
