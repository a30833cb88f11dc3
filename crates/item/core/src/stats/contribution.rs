//! Stat contribution values.
//!
//! A contribution is one attribute's flat + percent pair as read from a
//! metadata table or produced by a roll. Normal stats carry an integer flat
//! value, special stats a floating one; the asymmetry comes from the client
//! data format and is deliberate.

use super::attribute::{SpecialStatId, StatAttribute, StatId};

/// Contribution to a normal attribute (integer flat).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalStat {
    pub id: StatId,
    pub flat: i32,
    pub percent: f32,
}

impl NormalStat {
    pub const fn new(id: StatId, flat: i32, percent: f32) -> Self {
        Self { id, flat, percent }
    }
}

/// Contribution to a special attribute (float flat).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialStat {
    pub id: SpecialStatId,
    pub flat: f32,
    pub percent: f32,
}

impl SpecialStat {
    pub const fn new(id: SpecialStatId, flat: f32, percent: f32) -> Self {
        Self { id, flat, percent }
    }
}

/// A single stat entry on an item, tagged by attribute kind.
///
/// Replaces the original dynamic base-class representation with an explicit
/// variant: the flat value is `i32` for normal stats and `f32` for special
/// stats, while `percent` is `f32` for both.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemStat {
    Normal(NormalStat),
    Special(SpecialStat),
}

impl ItemStat {
    /// The `(kind, id)` identity of this entry.
    pub fn attribute(&self) -> StatAttribute {
        match self {
            ItemStat::Normal(stat) => StatAttribute::Normal(stat.id),
            ItemStat::Special(stat) => StatAttribute::Special(stat.id),
        }
    }

    pub fn percent(&self) -> f32 {
        match self {
            ItemStat::Normal(stat) => stat.percent,
            ItemStat::Special(stat) => stat.percent,
        }
    }
}

impl From<NormalStat> for ItemStat {
    fn from(stat: NormalStat) -> Self {
        ItemStat::Normal(stat)
    }
}

impl From<SpecialStat> for ItemStat {
    fn from(stat: SpecialStat) -> Self {
        ItemStat::Special(stat)
    }
}
