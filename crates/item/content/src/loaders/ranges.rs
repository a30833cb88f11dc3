//! Range table catalog loader.
//!
//! Range tables are authored as flat bucket lists; this loader enforces the
//! 16-bucket shape (two tiers of eight) the engine indexes into.

use std::path::Path;

use item_core::{
    ItemOptionRangeType, MetadataSnapshot, NormalStat, NormalStatRange, RANGE_BUCKETS,
    SpecialStat, SpecialStatRange, SpecialStatId, StatId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Value buckets for one normal attribute in one range partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalRangeEntry {
    pub range_type: ItemOptionRangeType,
    pub stat_id: StatId,
    pub buckets: Vec<NormalStat>,
}

/// Value buckets for one special attribute in one range partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialRangeEntry {
    pub range_type: ItemOptionRangeType,
    pub stat_id: SpecialStatId,
    pub buckets: Vec<SpecialStat>,
}

/// Range table catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeCatalog {
    pub normal: Vec<NormalRangeEntry>,
    pub special: Vec<SpecialRangeEntry>,
}

/// Loader for range table catalogs from RON files.
pub struct RangeTableLoader;

impl RangeTableLoader {
    /// Load a range table catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<RangeCatalog> {
        let content = read_file(path)?;
        let catalog: RangeCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse range table catalog RON: {}", e))?;

        Ok(catalog)
    }

    /// Insert every catalog entry into a metadata snapshot.
    ///
    /// # Errors
    ///
    /// Fails when an entry does not carry exactly [`RANGE_BUCKETS`] buckets.
    pub fn apply(catalog: &RangeCatalog, snapshot: &mut MetadataSnapshot) -> LoadResult<()> {
        for entry in &catalog.normal {
            let buckets: [NormalStat; RANGE_BUCKETS] =
                entry.buckets.clone().try_into().map_err(|_| {
                    anyhow::anyhow!(
                        "range table {}/{} has {} buckets, expected {}",
                        entry.range_type,
                        entry.stat_id,
                        entry.buckets.len(),
                        RANGE_BUCKETS
                    )
                })?;
            snapshot.insert_normal_range(entry.range_type, entry.stat_id, NormalStatRange(buckets));
        }
        for entry in &catalog.special {
            let buckets: [SpecialStat; RANGE_BUCKETS] =
                entry.buckets.clone().try_into().map_err(|_| {
                    anyhow::anyhow!(
                        "range table {}/{} has {} buckets, expected {}",
                        entry.range_type,
                        entry.stat_id,
                        entry.buckets.len(),
                        RANGE_BUCKETS
                    )
                })?;
            snapshot.insert_special_range(
                entry.range_type,
                entry.stat_id,
                SpecialStatRange(buckets),
            );
        }
        Ok(())
    }
}
