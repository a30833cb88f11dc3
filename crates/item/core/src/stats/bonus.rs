//! Bonus stat rolling.
//!
//! An item's random option table lists candidate attributes; each candidate
//! that has a range-table entry for the item's slot partition gets a value
//! drawn from one of 16 precomputed buckets, and a shuffled subset of the
//! results becomes the item's bonus stats. Candidates without a range entry
//! are filtered out by design, not treated as an error.

use crate::env::{HIGH_TIER_LEVEL_FACTOR, ItemOptionOracle, ItemOptionRandom, RngOracle};
use crate::item::{ItemId, ItemSlot};
use crate::stats::{ItemStat, StatAttribute};

/// Roll the bonus stat set for a freshly created item.
///
/// Returns an empty set when the item has no random option table for this
/// rarity. The number of kept stats is drawn once from the table's slot
/// range, lower bound included, upper bound excluded.
pub fn roll_bonus_stats<M, R>(item_id: ItemId, rarity: u8, meta: &M, rng: &mut R) -> Vec<ItemStat>
where
    M: ItemOptionOracle + ?Sized,
    R: RngOracle,
{
    let option_id = meta.random_option_id(item_id);
    let Some(random_option) = meta.random_option(option_id, rarity) else {
        return Vec::new();
    };

    let slots = rng.range_exclusive(random_option.slots.min, random_option.slots.max);

    let slot = meta.item_slot(item_id);
    let level_factor = meta.level_factor(item_id);
    let mut candidates = roll_candidates(random_option, slot, level_factor, meta, rng, None);

    rng.shuffle(&mut candidates);
    candidates.truncate(slots.max(0) as usize);
    candidates
}

/// Roll a value for every candidate attribute in a random option table.
///
/// `excluded` removes one attribute from the candidate pool before rolling;
/// because the attribute key is typed, an excluded special attribute never
/// touches the normal candidates and vice versa.
pub(crate) fn roll_candidates<M, R>(
    random_option: &ItemOptionRandom,
    slot: ItemSlot,
    level_factor: i32,
    meta: &M,
    rng: &mut R,
    excluded: Option<StatAttribute>,
) -> Vec<ItemStat>
where
    M: ItemOptionOracle + ?Sized,
    R: RngOracle,
{
    let range_type = slot.range_type();
    let mut rolled = Vec::new();

    for candidate in &random_option.stats {
        if excluded == Some(StatAttribute::Normal(candidate.id)) {
            continue;
        }
        let Some(range) = meta.normal_range(range_type, candidate.id) else {
            continue;
        };
        let mut stat = range.0[roll_bucket(level_factor, rng)];
        if random_option.multiply_factor > 0.0 {
            stat.flat *= random_option.multiply_factor.ceil() as i32;
            stat.percent *= random_option.multiply_factor;
        }
        rolled.push(ItemStat::Normal(stat));
    }

    for candidate in &random_option.special_stats {
        if excluded == Some(StatAttribute::Special(candidate.id)) {
            continue;
        }
        let Some(range) = meta.special_range(range_type, candidate.id) else {
            continue;
        };
        let mut stat = range.0[roll_bucket(level_factor, rng)];
        if random_option.multiply_factor > 0.0 {
            // Flat values scale by the rounded-up factor even though the flat
            // is a float here; percent scales by the raw factor. Matches the
            // live servers.
            stat.flat *= random_option.multiply_factor.ceil();
            stat.percent *= random_option.multiply_factor;
        }
        rolled.push(ItemStat::Special(stat));
    }

    rolled
}

/// Draw a range-table bucket index.
///
/// Buckets 0..8 serve items below the high-tier level factor, 8..16 the rest.
/// Within a tier the eight buckets follow the published distribution:
/// 24%, 24%, 26%, 16%, 6.6%, 1.9%, 1.25%, 0.25%.
pub(crate) fn roll_bucket<R>(level_factor: i32, rng: &mut R) -> usize
where
    R: RngOracle,
{
    let tier_base = if level_factor >= HIGH_TIER_LEVEL_FACTOR {
        8
    } else {
        0
    };
    let offset = match rng.next_f64() {
        x if x < 0.24 => 0,
        x if x < 0.48 => 1,
        x if x < 0.74 => 2,
        x if x < 0.9 => 3,
        x if x < 0.966 => 4,
        x if x < 0.985 => 5,
        x if x < 0.9975 => 6,
        _ => 7,
    };
    tier_base + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        ItemOptionRangeType, MetadataSnapshot, NormalStatRange, OptionId, Pcg32, SlotRange,
        SpecialStatRange,
    };
    use crate::stats::{NormalStat, SpecialStat, SpecialStatId, StatId};

    fn bucket_range(id: StatId) -> NormalStatRange {
        // Bucket index encoded in the flat value so tests can recover it.
        NormalStatRange(std::array::from_fn(|i| NormalStat::new(id, i as i32, 0.0)))
    }

    fn special_bucket_range(id: SpecialStatId) -> SpecialStatRange {
        SpecialStatRange(std::array::from_fn(|i| {
            SpecialStat::new(id, i as f32, 0.0)
        }))
    }

    fn fixture(level_factor: i32, slots: SlotRange, multiply_factor: f32) -> MetadataSnapshot {
        MetadataSnapshot::new()
            .with_item_facts(ItemId(100), ItemSlot::Ring, level_factor)
            .with_random_option(
                ItemId(100),
                OptionId(900),
                4,
                ItemOptionRandom {
                    stats: vec![
                        NormalStat::new(StatId::Str, 0, 0.0),
                        NormalStat::new(StatId::Dex, 0, 0.0),
                        NormalStat::new(StatId::CritRate, 0, 0.0),
                    ],
                    special_stats: vec![SpecialStat::new(SpecialStatId::BossDamage, 0.0, 0.0)],
                    slots,
                    multiply_factor,
                },
            )
            .with_normal_range(ItemOptionRangeType::Accessory, StatId::Str, bucket_range(StatId::Str))
            .with_normal_range(ItemOptionRangeType::Accessory, StatId::Dex, bucket_range(StatId::Dex))
            .with_special_range(
                ItemOptionRangeType::Accessory,
                SpecialStatId::BossDamage,
                special_bucket_range(SpecialStatId::BossDamage),
            )
        // CritRate deliberately has no range entry.
    }

    #[test]
    fn low_tier_bucket_distribution_matches_published_rates() {
        let mut rng = Pcg32::seeded(1234);
        const TRIALS: usize = 100_000;
        let mut histogram = [0usize; 16];
        for _ in 0..TRIALS {
            histogram[roll_bucket(55, &mut rng)] += 1;
        }

        let expected = [0.24, 0.24, 0.26, 0.16, 0.066, 0.019, 0.0125, 0.0025];
        for (bucket, &rate) in expected.iter().enumerate() {
            let observed = histogram[bucket] as f64 / TRIALS as f64;
            assert!(
                (observed - rate).abs() < 0.01,
                "bucket {bucket}: observed {observed}, expected {rate}"
            );
        }
        // Low tier never touches the high buckets.
        assert!(histogram[8..].iter().all(|&count| count == 0));
    }

    #[test]
    fn high_tier_uses_upper_buckets_only() {
        let mut rng = Pcg32::seeded(99);
        for _ in 0..10_000 {
            let bucket = roll_bucket(70, &mut rng);
            assert!((8..16).contains(&bucket));
        }
    }

    #[test]
    fn slot_count_stays_in_half_open_range() {
        let meta = fixture(55, SlotRange { min: 1, max: 3 }, 0.0);
        for seed in 0..200 {
            let mut rng = Pcg32::seeded(seed);
            let bonus = roll_bonus_stats(ItemId(100), 4, &meta, &mut rng);
            assert!(
                (1..3).contains(&bonus.len()),
                "rolled {} bonus stats",
                bonus.len()
            );
        }
    }

    #[test]
    fn missing_random_option_rolls_nothing() {
        let meta = fixture(55, SlotRange { min: 1, max: 3 }, 0.0);
        let mut rng = Pcg32::seeded(5);
        assert!(roll_bonus_stats(ItemId(100), 2, &meta, &mut rng).is_empty());
    }

    #[test]
    fn candidates_without_range_entries_are_filtered() {
        let meta = fixture(55, SlotRange { min: 1, max: 4 }, 0.0);
        let random_option = meta.random_option(OptionId(900), 4).unwrap();
        let mut rng = Pcg32::seeded(8);

        let candidates =
            roll_candidates(random_option, ItemSlot::Ring, 55, &meta, &mut rng, None);
        // Str, Dex, BossDamage roll; CritRate has no accessory range entry.
        assert_eq!(candidates.len(), 3);
        assert!(
            candidates
                .iter()
                .all(|stat| stat.attribute() != StatAttribute::Normal(StatId::CritRate))
        );
    }

    #[test]
    fn multiply_factor_scales_flat_by_ceiling_and_percent_directly() {
        let meta = MetadataSnapshot::new()
            .with_item_facts(ItemId(100), ItemSlot::Ring, 55)
            .with_normal_range(
                ItemOptionRangeType::Accessory,
                StatId::Str,
                NormalStatRange(std::array::from_fn(|_| {
                    NormalStat::new(StatId::Str, 10, 1.0)
                })),
            );
        let random_option = ItemOptionRandom {
            stats: vec![NormalStat::new(StatId::Str, 0, 0.0)],
            special_stats: Vec::new(),
            slots: SlotRange { min: 1, max: 2 },
            multiply_factor: 2.5,
        };
        let mut rng = Pcg32::seeded(3);

        let candidates =
            roll_candidates(&random_option, ItemSlot::Ring, 55, &meta, &mut rng, None);
        let ItemStat::Normal(stat) = candidates[0] else {
            panic!("expected a normal stat");
        };
        // Flat scales by ceil(2.5) = 3, percent by 2.5 itself.
        assert_eq!(stat.flat, 30);
        assert_eq!(stat.percent, 2.5);
    }
}
