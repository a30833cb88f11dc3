//! Item identity and the owning item instance.

use crate::env::{ItemOptionOracle, ItemOptionRangeType, RngOracle};
use crate::stats::{ItemStats, RerollError, StatAttribute};

/// Reference to an item definition stored outside the core (lookup via the
/// metadata oracle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Equip slot of an item definition.
///
/// Drives which range-table partition a bonus roll reads from and whether the
/// item can carry gem sockets. Anything not otherwise classified (badges,
/// lapenshards, pets themselves) falls back to the pet range tables.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ItemSlot {
    /// Not an equip item.
    #[default]
    None,
    Cap,
    Clothes,
    Pants,
    Gloves,
    Shoes,
    Mantle,
    Eyewear,
    Earring,
    Pendant,
    Ring,
    Belt,
    RightHand,
    LeftHand,
    OffHand,
}

impl ItemSlot {
    pub fn is_weapon(self) -> bool {
        matches!(
            self,
            ItemSlot::RightHand | ItemSlot::LeftHand | ItemSlot::OffHand
        )
    }

    pub fn is_armor(self) -> bool {
        matches!(
            self,
            ItemSlot::Cap
                | ItemSlot::Clothes
                | ItemSlot::Pants
                | ItemSlot::Gloves
                | ItemSlot::Shoes
                | ItemSlot::Mantle
        )
    }

    pub fn is_accessory(self) -> bool {
        matches!(
            self,
            ItemSlot::Eyewear
                | ItemSlot::Earring
                | ItemSlot::Pendant
                | ItemSlot::Ring
                | ItemSlot::Belt
        )
    }

    /// The range-table partition for this slot. Pet is the fallback.
    pub fn range_type(self) -> ItemOptionRangeType {
        if self.is_accessory() {
            ItemOptionRangeType::Accessory
        } else if self.is_armor() {
            ItemOptionRangeType::Armor
        } else if self.is_weapon() {
            ItemOptionRangeType::Weapon
        } else {
            ItemOptionRangeType::Pet
        }
    }
}

/// An owned item instance with its generated stat block.
///
/// The stat block is created once at construction and mutated only by the
/// reroll methods; nothing else aliases it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: ItemId,
    pub rarity: u8,
    pub item_level: i32,
    pub slot: ItemSlot,
    pub stats: ItemStats,
}

impl ItemInstance {
    /// Create an item instance, rolling a fresh stat block.
    pub fn new<M, R>(id: ItemId, rarity: u8, item_level: i32, meta: &M, rng: &mut R) -> Self
    where
        M: ItemOptionOracle + ?Sized,
        R: RngOracle,
    {
        Self {
            id,
            rarity,
            item_level,
            slot: meta.item_slot(id),
            stats: ItemStats::generate(id, rarity, item_level, meta, rng),
        }
    }

    /// Reroll bonus stat identities and values, preserving the current bonus
    /// count and never rolling the locked attribute.
    ///
    /// # Errors
    ///
    /// Returns [`RerollError::NotRerollable`] (and leaves the stat block
    /// untouched) when the item has no random option table.
    pub fn reroll_bonus_stats<M, R>(
        &mut self,
        locked: StatAttribute,
        meta: &M,
        rng: &mut R,
    ) -> Result<(), RerollError>
    where
        M: ItemOptionOracle + ?Sized,
        R: RngOracle,
    {
        let rolled = crate::stats::reroll::reroll_bonus_stats(self, locked, meta, rng)?;
        self.stats.bonus_stats = rolled;
        Ok(())
    }

    /// Reroll only the values of the existing bonus stats, keeping the locked
    /// entry exactly as it is.
    pub fn reroll_bonus_values<M, R>(&mut self, locked: StatAttribute, meta: &M, rng: &mut R)
    where
        M: ItemOptionOracle + ?Sized,
        R: RngOracle,
    {
        self.stats.bonus_stats = crate::stats::reroll::reroll_bonus_values(self, locked, meta, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_range_type_classification() {
        assert_eq!(ItemSlot::RightHand.range_type(), ItemOptionRangeType::Weapon);
        assert_eq!(ItemSlot::Gloves.range_type(), ItemOptionRangeType::Armor);
        assert_eq!(ItemSlot::Ring.range_type(), ItemOptionRangeType::Accessory);
        assert_eq!(ItemSlot::None.range_type(), ItemOptionRangeType::Pet);
    }
}
