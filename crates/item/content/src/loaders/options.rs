//! Item option catalog loader.

use std::path::Path;

use item_core::{
    ItemId, ItemOptionPreset, ItemOptionRandom, ItemSlot, MetadataSnapshot, OptionId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Per-item facts: equip slot, level factor, and derived option ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFacts {
    pub id: ItemId,
    pub slot: ItemSlot,
    pub level_factor: i32,
    pub static_option_id: Option<OptionId>,
    pub random_option_id: Option<OptionId>,
}

/// Constant option layer keyed by item id and rarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantOptionEntry {
    pub item_id: ItemId,
    pub rarity: u8,
    pub preset: ItemOptionPreset,
}

/// Static option layer keyed by option id and rarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticOptionEntry {
    pub option_id: OptionId,
    pub rarity: u8,
    pub preset: ItemOptionPreset,
}

/// Random option table keyed by option id and rarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomOptionEntry {
    pub option_id: OptionId,
    pub rarity: u8,
    pub option: ItemOptionRandom,
}

/// Item option catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemOptionCatalog {
    pub items: Vec<ItemFacts>,
    pub constant_options: Vec<ConstantOptionEntry>,
    pub static_options: Vec<StaticOptionEntry>,
    pub random_options: Vec<RandomOptionEntry>,
}

/// Loader for item option catalogs from RON files.
pub struct ItemOptionLoader;

impl ItemOptionLoader {
    /// Load an item option catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemOptionCatalog> {
        let content = read_file(path)?;
        let catalog: ItemOptionCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item option catalog RON: {}", e))?;

        Ok(catalog)
    }

    /// Insert every catalog entry into a metadata snapshot.
    pub fn apply(catalog: &ItemOptionCatalog, snapshot: &mut MetadataSnapshot) {
        for facts in &catalog.items {
            snapshot.insert_item_facts(facts.id, facts.slot, facts.level_factor);
            if let Some(option_id) = facts.static_option_id {
                snapshot.insert_static_option_id(facts.id, option_id);
            }
            if let Some(option_id) = facts.random_option_id {
                snapshot.insert_random_option_id(facts.id, option_id);
            }
        }
        for entry in &catalog.constant_options {
            snapshot.insert_constant_option(entry.item_id, entry.rarity, entry.preset.clone());
        }
        for entry in &catalog.static_options {
            snapshot.insert_static_option(entry.option_id, entry.rarity, entry.preset.clone());
        }
        for entry in &catalog.random_options {
            snapshot.insert_random_option(entry.option_id, entry.rarity, entry.option.clone());
        }
    }
}
