//! In-memory metadata store.
//!
//! [`MetadataSnapshot`] holds every option table in plain `BTreeMap`s and
//! implements [`ItemOptionOracle`] over them. The content loaders populate it
//! from catalog files at startup; tests build one by hand with the `with_*`
//! builder methods and get a fixture store with exactly the entries they
//! declare.

use std::collections::BTreeMap;

use super::meta::{
    ItemOptionOracle, ItemOptionPreset, ItemOptionRandom, ItemOptionRangeType, NormalStatRange,
    OptionId, SpecialStatRange,
};
use crate::item::{ItemId, ItemSlot};
use crate::stats::{SpecialStatId, StatId};

/// `BTreeMap`-backed implementation of [`ItemOptionOracle`].
///
/// Immutable after population. Items without an entry fall back to
/// [`ItemSlot::None`] and a level factor of 0, which routes their rolls to
/// the pet range partition and the low bucket tier.
#[derive(Clone, Debug, Default)]
pub struct MetadataSnapshot {
    constant_options: BTreeMap<(ItemId, u8), ItemOptionPreset>,
    static_option_ids: BTreeMap<ItemId, OptionId>,
    static_options: BTreeMap<(OptionId, u8), ItemOptionPreset>,
    random_option_ids: BTreeMap<ItemId, OptionId>,
    random_options: BTreeMap<(OptionId, u8), ItemOptionRandom>,
    normal_ranges: BTreeMap<(ItemOptionRangeType, StatId), NormalStatRange>,
    special_ranges: BTreeMap<(ItemOptionRangeType, SpecialStatId), SpecialStatRange>,
    item_slots: BTreeMap<ItemId, ItemSlot>,
    level_factors: BTreeMap<ItemId, i32>,
}

impl MetadataSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_constant_option(
        &mut self,
        item_id: ItemId,
        rarity: u8,
        preset: ItemOptionPreset,
    ) {
        self.constant_options.insert((item_id, rarity), preset);
    }

    pub fn insert_static_option_id(&mut self, item_id: ItemId, option_id: OptionId) {
        self.static_option_ids.insert(item_id, option_id);
    }

    pub fn insert_static_option(
        &mut self,
        option_id: OptionId,
        rarity: u8,
        preset: ItemOptionPreset,
    ) {
        self.static_options.insert((option_id, rarity), preset);
    }

    pub fn insert_random_option_id(&mut self, item_id: ItemId, option_id: OptionId) {
        self.random_option_ids.insert(item_id, option_id);
    }

    pub fn insert_random_option(
        &mut self,
        option_id: OptionId,
        rarity: u8,
        option: ItemOptionRandom,
    ) {
        self.random_options.insert((option_id, rarity), option);
    }

    pub fn insert_normal_range(
        &mut self,
        range_type: ItemOptionRangeType,
        stat_id: StatId,
        range: NormalStatRange,
    ) {
        self.normal_ranges.insert((range_type, stat_id), range);
    }

    pub fn insert_special_range(
        &mut self,
        range_type: ItemOptionRangeType,
        stat_id: SpecialStatId,
        range: SpecialStatRange,
    ) {
        self.special_ranges.insert((range_type, stat_id), range);
    }

    pub fn insert_item_facts(&mut self, item_id: ItemId, slot: ItemSlot, level_factor: i32) {
        self.item_slots.insert(item_id, slot);
        self.level_factors.insert(item_id, level_factor);
    }

    // Builder-style variants for fixture construction in tests.

    pub fn with_constant_option(
        mut self,
        item_id: ItemId,
        rarity: u8,
        preset: ItemOptionPreset,
    ) -> Self {
        self.insert_constant_option(item_id, rarity, preset);
        self
    }

    pub fn with_static_option(
        mut self,
        item_id: ItemId,
        option_id: OptionId,
        rarity: u8,
        preset: ItemOptionPreset,
    ) -> Self {
        self.insert_static_option_id(item_id, option_id);
        self.insert_static_option(option_id, rarity, preset);
        self
    }

    pub fn with_random_option(
        mut self,
        item_id: ItemId,
        option_id: OptionId,
        rarity: u8,
        option: ItemOptionRandom,
    ) -> Self {
        self.insert_random_option_id(item_id, option_id);
        self.insert_random_option(option_id, rarity, option);
        self
    }

    pub fn with_normal_range(
        mut self,
        range_type: ItemOptionRangeType,
        stat_id: StatId,
        range: NormalStatRange,
    ) -> Self {
        self.insert_normal_range(range_type, stat_id, range);
        self
    }

    pub fn with_special_range(
        mut self,
        range_type: ItemOptionRangeType,
        stat_id: SpecialStatId,
        range: SpecialStatRange,
    ) -> Self {
        self.insert_special_range(range_type, stat_id, range);
        self
    }

    pub fn with_item_facts(mut self, item_id: ItemId, slot: ItemSlot, level_factor: i32) -> Self {
        self.insert_item_facts(item_id, slot, level_factor);
        self
    }
}

impl ItemOptionOracle for MetadataSnapshot {
    fn constant_option(&self, item_id: ItemId, rarity: u8) -> Option<&ItemOptionPreset> {
        self.constant_options.get(&(item_id, rarity))
    }

    fn static_option_id(&self, item_id: ItemId) -> OptionId {
        self.static_option_ids
            .get(&item_id)
            .copied()
            .unwrap_or(OptionId(0))
    }

    fn static_option(&self, option_id: OptionId, rarity: u8) -> Option<&ItemOptionPreset> {
        self.static_options.get(&(option_id, rarity))
    }

    fn random_option_id(&self, item_id: ItemId) -> OptionId {
        self.random_option_ids
            .get(&item_id)
            .copied()
            .unwrap_or(OptionId(0))
    }

    fn random_option(&self, option_id: OptionId, rarity: u8) -> Option<&ItemOptionRandom> {
        self.random_options.get(&(option_id, rarity))
    }

    fn normal_range(
        &self,
        range_type: ItemOptionRangeType,
        stat_id: StatId,
    ) -> Option<&NormalStatRange> {
        self.normal_ranges.get(&(range_type, stat_id))
    }

    fn special_range(
        &self,
        range_type: ItemOptionRangeType,
        stat_id: SpecialStatId,
    ) -> Option<&SpecialStatRange> {
        self.special_ranges.get(&(range_type, stat_id))
    }

    fn item_slot(&self, item_id: ItemId) -> ItemSlot {
        self.item_slots.get(&item_id).copied().unwrap_or_default()
    }

    fn level_factor(&self, item_id: ItemId) -> i32 {
        self.level_factors.get(&item_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::NormalStat;

    #[test]
    fn missing_entries_degrade_to_defaults() {
        let snapshot = MetadataSnapshot::new();
        let id = ItemId(999);
        assert!(snapshot.constant_option(id, 1).is_none());
        assert!(snapshot.static_option(OptionId(0), 1).is_none());
        assert!(snapshot.random_option(OptionId(0), 1).is_none());
        assert_eq!(snapshot.item_slot(id), ItemSlot::None);
        assert_eq!(snapshot.level_factor(id), 0);
    }

    #[test]
    fn lookups_are_keyed_by_rarity() {
        let preset = ItemOptionPreset {
            stats: vec![NormalStat::new(StatId::Defense, 10, 0.0)],
            ..Default::default()
        };
        let snapshot = MetadataSnapshot::new().with_constant_option(ItemId(1), 3, preset);
        assert!(snapshot.constant_option(ItemId(1), 3).is_some());
        assert!(snapshot.constant_option(ItemId(1), 4).is_none());
    }
}
