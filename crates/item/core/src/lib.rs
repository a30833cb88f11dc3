//! Deterministic item stat generation for the game server.
//!
//! `item-core` computes the randomized combat/utility statistics of an item
//! instance from static design tables: base stat composition, weighted bonus
//! rolls, partial rerolls with a locked attribute, and gem socket unlocking.
//! All lookups go through the read-only oracles in [`env`] and every random
//! draw goes through an explicit [`env::RngOracle`] handle, so the whole
//! pipeline is reproducible from a seed.
pub mod env;
pub mod item;
pub mod stats;

pub use env::{
    HiddenBonus, ItemOptionOracle, ItemOptionPreset, ItemOptionRandom, ItemOptionRangeType,
    MetadataSnapshot, NormalStatRange, OptionId, Pcg32, RANGE_BUCKETS, RngOracle, SlotRange,
    SpecialStatRange,
};
pub use item::{ItemId, ItemInstance, ItemSlot};
pub use stats::{
    GemSocket, Gemstone, ItemStat, ItemStats, NormalStat, RerollError, SpecialStat, StatAttribute,
    StatId, SpecialStatId,
};
