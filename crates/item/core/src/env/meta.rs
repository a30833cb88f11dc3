//! Metadata option tables and the oracle trait that serves them.
//!
//! The game design tables are compiled offline and loaded once at server
//! startup; this module only defines their in-process shape and the read-only
//! lookup seam. Every getter returns `Option` — a missing layer means "this
//! item has no such layer", never a fault.

use crate::item::{ItemId, ItemSlot};
use crate::stats::{NormalStat, SpecialStat, SpecialStatId, StatId};

/// Identifier of a static or random option table entry.
///
/// Option ids are derived from item ids by the metadata pipeline and shared
/// between items that roll from the same tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionId(pub u32);

/// Hidden bonus descriptor on a constant or static option layer.
///
/// The raw `add` value and its calibrated counterpart `add * calibration`
/// bound a uniform draw that augments an already-present stat entry. A hidden
/// bonus never creates an entry on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiddenBonus {
    pub add: i32,
    pub calibration_factor: f32,
}

/// One constant or static option layer for an `(item/option id, rarity)`
/// pair.
///
/// Constant and static layers share a shape: base normal/special
/// contributions plus optional hidden defense and weapon-attack bonuses. The
/// weapon-attack bonus applies identically to both the min and max
/// weapon-attack attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOptionPreset {
    pub stats: Vec<NormalStat>,
    pub special_stats: Vec<SpecialStat>,
    pub hidden_defense: Option<HiddenBonus>,
    pub hidden_weapon_atk: Option<HiddenBonus>,
}

/// Bonus slot count range, lower bound included, upper bound excluded.
///
/// The exclusive upper bound matches the live data exactly as authored; it
/// may well be an authoring mistake (max intended inclusive), but rolls are
/// kept bit-compatible with the original server rather than "fixed" here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRange {
    pub min: i32,
    pub max: i32,
}

impl Default for SlotRange {
    fn default() -> Self {
        Self { min: 0, max: 0 }
    }
}

/// Random (bonus) option table for an `(option id, rarity)` pair.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOptionRandom {
    pub stats: Vec<NormalStat>,
    pub special_stats: Vec<SpecialStat>,
    pub slots: SlotRange,
    pub multiply_factor: f32,
}

/// Number of value buckets in a range table: 0..8 for the low item-level
/// tier, 8..16 for the high tier.
pub const RANGE_BUCKETS: usize = 16;

/// Level factor at or above which the high bucket tier applies.
pub const HIGH_TIER_LEVEL_FACTOR: i32 = 70;

/// Value buckets for one normal attribute in one range partition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalStatRange(pub [NormalStat; RANGE_BUCKETS]);

/// Value buckets for one special attribute in one range partition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialStatRange(pub [SpecialStat; RANGE_BUCKETS]);

/// Range-table partition, selected by the item's equip slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemOptionRangeType {
    Weapon,
    Armor,
    Accessory,
    Pet,
}

/// Read-only access to the item option metadata tables.
///
/// Implementations are shared process-wide and immutable once populated, so
/// lookups need no synchronization. [`MetadataSnapshot`] is the in-memory
/// implementation used by the content loaders and by tests.
///
/// [`MetadataSnapshot`]: crate::env::MetadataSnapshot
pub trait ItemOptionOracle: Send + Sync {
    /// Constant option layer for an item at a rarity.
    fn constant_option(&self, item_id: ItemId, rarity: u8) -> Option<&ItemOptionPreset>;

    /// Static option id derived from an item id.
    fn static_option_id(&self, item_id: ItemId) -> OptionId;

    /// Static option layer for a derived option id at a rarity.
    fn static_option(&self, option_id: OptionId, rarity: u8) -> Option<&ItemOptionPreset>;

    /// Random option id derived from an item id.
    fn random_option_id(&self, item_id: ItemId) -> OptionId;

    /// Random (bonus) option table for a derived option id at a rarity.
    fn random_option(&self, option_id: OptionId, rarity: u8) -> Option<&ItemOptionRandom>;

    /// Value buckets for a normal attribute in a range partition.
    fn normal_range(
        &self,
        range_type: ItemOptionRangeType,
        stat_id: StatId,
    ) -> Option<&NormalStatRange>;

    /// Value buckets for a special attribute in a range partition.
    fn special_range(
        &self,
        range_type: ItemOptionRangeType,
        stat_id: SpecialStatId,
    ) -> Option<&SpecialStatRange>;

    /// Equip slot of an item definition.
    fn item_slot(&self, item_id: ItemId) -> ItemSlot;

    /// Per-item level factor selecting the bucket tier.
    fn level_factor(&self, item_id: ItemId) -> i32;
}
