//! Item stat generation.
//!
//! The stat block of an item instance is assembled in three passes:
//!
//! ```text
//! [ Stat Composer ]   constant + static option layers -> basic_stats
//!      ↓
//! [ Bonus Roller ]    tiered weighted draws            -> bonus_stats
//!      ↓
//! [ Socket Roller ]   rarity/slot gated unlock pass    -> gem_sockets
//! ```
//!
//! Reroll requests bypass the first and last pass and regenerate
//! `bonus_stats` only (see [`reroll`]).
//!
//! Missing metadata never faults: an absent layer or range entry shrinks the
//! output instead. Rarity 0 short-circuits to an entirely empty block.

pub mod attribute;
pub mod bonus;
pub mod compose;
pub mod contribution;
pub mod reroll;
pub mod socket;

pub use attribute::{SpecialStatId, StatAttribute, StatId};
pub use bonus::roll_bonus_stats;
pub use compose::compose;
pub use contribution::{ItemStat, NormalStat, SpecialStat};
pub use reroll::{RerollError, reroll_bonus_stats, reroll_bonus_values};
pub use socket::{GemSocket, Gemstone, roll_gem_sockets};

use crate::env::{ItemOptionOracle, RngOracle};
use crate::item::ItemId;

/// Minimum instance level for an item to roll gem sockets at creation.
const SOCKET_MIN_ITEM_LEVEL: i32 = 50;

/// Minimum rarity for an item to roll gem sockets at creation.
const SOCKET_MIN_RARITY: u8 = 3;

/// The aggregate stat block owned by one item instance.
///
/// `basic_stats` holds at most one entry per attribute (layers merge
/// additively); `bonus_stats` is the rolled random layer; `gem_sockets` is
/// present only on eligible accessories.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStats {
    pub basic_stats: Vec<ItemStat>,
    pub bonus_stats: Vec<ItemStat>,
    pub gem_sockets: Vec<GemSocket>,
}

impl ItemStats {
    /// An empty stat block (what rarity 0 items carry).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate the full stat block for a new item instance.
    pub fn generate<M, R>(
        item_id: ItemId,
        rarity: u8,
        item_level: i32,
        meta: &M,
        rng: &mut R,
    ) -> Self
    where
        M: ItemOptionOracle + ?Sized,
        R: RngOracle,
    {
        if rarity == 0 {
            return Self::empty();
        }

        let basic_stats = compose::compose(item_id, rarity, meta, rng);
        let bonus_stats = bonus::roll_bonus_stats(item_id, rarity, meta, rng);
        let gem_sockets = if item_level >= SOCKET_MIN_ITEM_LEVEL && rarity >= SOCKET_MIN_RARITY {
            socket::roll_gem_sockets(meta.item_slot(item_id), rarity, rng)
        } else {
            Vec::new()
        };

        Self {
            basic_stats,
            bonus_stats,
            gem_sockets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        ItemOptionPreset, ItemOptionRandom, ItemOptionRangeType, MetadataSnapshot, NormalStatRange,
        OptionId, Pcg32, SlotRange,
    };
    use crate::item::ItemSlot;

    const RING: ItemId = ItemId(12100050);

    /// Rarity 4 ring, level factor 55: a constant option granting +10 flat
    /// defense, a static option adding +5, and a one-candidate random table.
    fn ring_fixture() -> MetadataSnapshot {
        MetadataSnapshot::new()
            .with_item_facts(RING, ItemSlot::Ring, 55)
            .with_constant_option(
                RING,
                4,
                ItemOptionPreset {
                    stats: vec![NormalStat::new(StatId::Defense, 10, 0.0)],
                    ..Default::default()
                },
            )
            .with_static_option(
                RING,
                OptionId(121),
                4,
                ItemOptionPreset {
                    stats: vec![NormalStat::new(StatId::Defense, 5, 0.0)],
                    ..Default::default()
                },
            )
            .with_random_option(
                RING,
                OptionId(122),
                4,
                ItemOptionRandom {
                    stats: vec![NormalStat::new(StatId::Dex, 0, 0.0)],
                    special_stats: Vec::new(),
                    slots: SlotRange { min: 1, max: 2 },
                    multiply_factor: 0.0,
                },
            )
            .with_normal_range(
                ItemOptionRangeType::Accessory,
                StatId::Dex,
                NormalStatRange(std::array::from_fn(|i| {
                    NormalStat::new(StatId::Dex, i as i32 + 1, 0.0)
                })),
            )
    }

    #[test]
    fn rarity_zero_yields_an_entirely_empty_block() {
        let meta = ring_fixture();
        let mut rng = Pcg32::seeded(1);
        let stats = ItemStats::generate(RING, 0, 60, &meta, &mut rng);
        assert!(stats.basic_stats.is_empty());
        assert!(stats.bonus_stats.is_empty());
        assert!(stats.gem_sockets.is_empty());
    }

    #[test]
    fn end_to_end_ring_generation() {
        let meta = ring_fixture();
        let mut rng = Pcg32::seeded(42);
        let stats = ItemStats::generate(RING, 4, 60, &meta, &mut rng);

        // Constant +10 and static +5 defense merge into a single entry.
        assert_eq!(stats.basic_stats.len(), 1);
        assert_eq!(
            stats.basic_stats[0],
            ItemStat::Normal(NormalStat::new(StatId::Defense, 15, 0.0))
        );

        // One bonus stat (slot range [1, 2)), from the low tier buckets.
        assert_eq!(stats.bonus_stats.len(), 1);
        let ItemStat::Normal(dex) = stats.bonus_stats[0] else {
            panic!("expected a normal bonus stat");
        };
        assert_eq!(dex.id, StatId::Dex);
        assert!((1..=8).contains(&dex.flat));

        // Rarity 4 ring at item level >= 50 always carries three sockets.
        assert_eq!(stats.gem_sockets.len(), 3);
    }

    #[test]
    fn low_level_items_skip_the_socket_roll() {
        let meta = ring_fixture();
        let mut rng = Pcg32::seeded(7);
        let stats = ItemStats::generate(RING, 4, 40, &meta, &mut rng);
        assert!(stats.gem_sockets.is_empty());
        // Basic and bonus passes are unaffected by the socket gate.
        assert_eq!(stats.basic_stats.len(), 1);
        assert_eq!(stats.bonus_stats.len(), 1);
    }

    #[test]
    fn unknown_item_generates_a_valid_empty_block() {
        let meta = MetadataSnapshot::new();
        let mut rng = Pcg32::seeded(3);
        let stats = ItemStats::generate(ItemId(1), 4, 60, &meta, &mut rng);
        assert_eq!(stats, ItemStats::empty());
    }
}
