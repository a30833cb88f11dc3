//! Read-only environment seams for the stat engine.
//!
//! The engine consumes two oracles: the metadata tables (option layers, range
//! buckets, per-item facts) and a random source. Both are traits so the
//! server can supply its production store and generator while tests
//! substitute fixtures and seeded RNGs.
mod meta;
mod rng;
mod snapshot;

pub use meta::{
    HIGH_TIER_LEVEL_FACTOR, HiddenBonus, ItemOptionOracle, ItemOptionPreset, ItemOptionRandom,
    ItemOptionRangeType, NormalStatRange, OptionId, RANGE_BUCKETS, SlotRange, SpecialStatRange,
};
pub use rng::{Pcg32, RngOracle};
pub use snapshot::MetadataSnapshot;
