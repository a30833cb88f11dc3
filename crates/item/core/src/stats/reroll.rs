//! Bonus stat rerolling.
//!
//! Two distinct operations, both against an existing stat block:
//!
//! - [`reroll_bonus_stats`] rolls fresh identities and values, excluding the
//!   locked attribute from the candidate pool and keeping the bonus count.
//! - [`reroll_bonus_values`] keeps every identity and redraws values only,
//!   leaving the locked entry byte-for-byte untouched.
//!
//! The two operations gate the lock differently on purpose (exclude from
//! candidates vs keep in place); they reproduce the live servers and must not
//! be unified.

use crate::env::{ItemOptionOracle, RngOracle};
use crate::item::{ItemId, ItemInstance};
use crate::stats::bonus::{roll_bucket, roll_candidates};
use crate::stats::{ItemStat, StatAttribute};

/// Reroll request against an item that cannot be rerolled.
///
/// Callers treat this as a no-op signal, not a failure: the item simply has
/// no random option table and its stat block is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RerollError {
    #[error("item {0:?} has no random option table and cannot be rerolled")]
    NotRerollable(ItemId),
}

/// Roll a replacement bonus stat set with one locked attribute.
///
/// The locked attribute is removed from the candidate pool, every remaining
/// candidate gets a fresh value, and exactly as many entries as the item
/// currently carries are kept (identities may change).
///
/// # Errors
///
/// [`RerollError::NotRerollable`] when no random option table exists for the
/// item's rarity.
pub fn reroll_bonus_stats<M, R>(
    item: &ItemInstance,
    locked: StatAttribute,
    meta: &M,
    rng: &mut R,
) -> Result<Vec<ItemStat>, RerollError>
where
    M: ItemOptionOracle + ?Sized,
    R: RngOracle,
{
    let option_id = meta.random_option_id(item.id);
    let Some(random_option) = meta.random_option(option_id, item.rarity) else {
        return Err(RerollError::NotRerollable(item.id));
    };

    let level_factor = meta.level_factor(item.id);
    let mut candidates = roll_candidates(
        random_option,
        item.slot,
        level_factor,
        meta,
        rng,
        Some(locked),
    );

    rng.shuffle(&mut candidates);
    candidates.truncate(item.stats.bonus_stats.len());
    Ok(candidates)
}

/// Redraw the values of the existing bonus stats in place.
///
/// Identities are preserved; the locked entry keeps its exact prior value.
/// Entries whose attribute no longer has a range-table bucket are dropped
/// from the result, so the returned set can be smaller than the input.
pub fn reroll_bonus_values<M, R>(
    item: &ItemInstance,
    locked: StatAttribute,
    meta: &M,
    rng: &mut R,
) -> Vec<ItemStat>
where
    M: ItemOptionOracle + ?Sized,
    R: RngOracle,
{
    let range_type = item.slot.range_type();
    let level_factor = meta.level_factor(item.id);
    let mut rerolled = Vec::with_capacity(item.stats.bonus_stats.len());

    for stat in &item.stats.bonus_stats {
        if stat.attribute() == locked {
            rerolled.push(*stat);
            continue;
        }
        match stat {
            ItemStat::Normal(normal) => {
                let Some(range) = meta.normal_range(range_type, normal.id) else {
                    continue;
                };
                rerolled.push(ItemStat::Normal(range.0[roll_bucket(level_factor, rng)]));
            }
            ItemStat::Special(special) => {
                let Some(range) = meta.special_range(range_type, special.id) else {
                    continue;
                };
                rerolled.push(ItemStat::Special(range.0[roll_bucket(level_factor, rng)]));
            }
        }
    }

    rerolled
}
