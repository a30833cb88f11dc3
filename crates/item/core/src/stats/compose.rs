//! Basic stat composition.
//!
//! Merges the constant and static option layers into the item's base stat
//! set. Entries are keyed by [`StatAttribute`], so two layers contributing to
//! the same attribute collapse into one entry with summed flat and percent
//! values. Hidden bonuses augment an already-present attribute with a
//! calibrated random addition and are silently dropped when the attribute is
//! absent.

use std::collections::BTreeMap;

use crate::env::{HiddenBonus, ItemOptionOracle, ItemOptionPreset, RngOracle};
use crate::item::ItemId;
use crate::stats::{ItemStat, NormalStat, SpecialStat, SpecialStatId, StatId};

/// Compose the basic stat set for an item at a rarity.
///
/// Rarity 0 items carry no stats at all; missing constant or static layers
/// simply contribute nothing.
pub fn compose<M, R>(item_id: ItemId, rarity: u8, meta: &M, rng: &mut R) -> Vec<ItemStat>
where
    M: ItemOptionOracle + ?Sized,
    R: RngOracle,
{
    if rarity == 0 {
        return Vec::new();
    }

    let mut normal: BTreeMap<StatId, NormalStat> = BTreeMap::new();
    let mut special: BTreeMap<SpecialStatId, SpecialStat> = BTreeMap::new();

    if let Some(constant) = meta.constant_option(item_id, rarity) {
        apply_layer(&mut normal, &mut special, constant, rng);
    }

    let static_id = meta.static_option_id(item_id);
    if let Some(static_option) = meta.static_option(static_id, rarity) {
        apply_layer(&mut normal, &mut special, static_option, rng);
    }

    normal
        .into_values()
        .map(ItemStat::Normal)
        .chain(special.into_values().map(ItemStat::Special))
        .collect()
}

/// Merge one option layer into the accumulated stat maps, then apply its
/// hidden bonuses.
fn apply_layer<R>(
    normal: &mut BTreeMap<StatId, NormalStat>,
    special: &mut BTreeMap<SpecialStatId, SpecialStat>,
    layer: &ItemOptionPreset,
    rng: &mut R,
) where
    R: RngOracle,
{
    for stat in &layer.stats {
        normal
            .entry(stat.id)
            .and_modify(|existing| {
                existing.flat += stat.flat;
                existing.percent += stat.percent;
            })
            .or_insert(*stat);
    }

    for stat in &layer.special_stats {
        special
            .entry(stat.id)
            .and_modify(|existing| {
                existing.flat += stat.flat;
                existing.percent += stat.percent;
            })
            .or_insert(*stat);
    }

    if let Some(bonus) = layer.hidden_defense {
        apply_hidden_bonus(normal, StatId::Defense, bonus, rng);
    }

    // The weapon-attack hidden bonus augments both ends of the weapon damage
    // range with the same descriptor (separate draws).
    if let Some(bonus) = layer.hidden_weapon_atk {
        apply_hidden_bonus(normal, StatId::MinWeaponAtk, bonus, rng);
        apply_hidden_bonus(normal, StatId::MaxWeaponAtk, bonus, rng);
    }
}

/// Add a calibrated hidden bonus to an existing normal stat entry.
///
/// Draws a uniform integer between the raw value and `raw * calibration`
/// (whichever order they land in, both bounds included). If the attribute has
/// no entry yet, the bonus does not apply — it only ever augments.
fn apply_hidden_bonus<R>(
    normal: &mut BTreeMap<StatId, NormalStat>,
    id: StatId,
    bonus: HiddenBonus,
    rng: &mut R,
) where
    R: RngOracle,
{
    let Some(existing) = normal.get_mut(&id) else {
        return;
    };
    let calibrated = (bonus.add as f32 * bonus.calibration_factor) as i32;
    let lo = bonus.add.min(calibrated);
    let hi = bonus.add.max(calibrated);
    existing.flat += rng.range_inclusive(lo, hi);
}
