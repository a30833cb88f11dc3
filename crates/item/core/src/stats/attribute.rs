//! Stat attribute identifiers.
//!
//! Normal and special attributes live in disjoint namespaces: a [`StatId`]
//! and a [`SpecialStatId`] never collide even when their numeric codes in the
//! client data happen to match. [`StatAttribute`] is the composite key used
//! wherever the two kinds share a collection (merge maps, reroll locks).

/// Normal (integer-flat) stat attribute.
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
pub enum StatId {
    Str,
    Dex,
    Int,
    Luk,
    Hp,
    HpRegen,
    Spirit,
    SpiritRegen,
    Stamina,
    AttackSpeed,
    MovementSpeed,
    Accuracy,
    Evasion,
    CritRate,
    CritDamage,
    CritEvasion,
    Defense,
    PerfectGuard,
    JumpHeight,
    PhysicalAtk,
    MagicAtk,
    PhysicalRes,
    MagicRes,
    MinWeaponAtk,
    MaxWeaponAtk,
}

/// Special (float-flat) stat attribute.
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
pub enum SpecialStatId {
    ExpBonus,
    MesoBonus,
    SwimSpeed,
    DashDistance,
    MountSpeed,
    BossDamage,
    MeleeDamage,
    RangedDamage,
    NormalNpcDamage,
    HealBonus,
    CooldownReduction,
    FishingExp,
    PerformanceExp,
    MiningSpeed,
    GatheringSpeed,
}

/// Composite `(kind, id)` key over both attribute namespaces.
///
/// Used as the map key for additive stat merging and as the lock identity in
/// reroll requests. The enum keeps the namespaces disjoint by construction: a
/// lock on a special attribute can never match a normal candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatAttribute {
    Normal(StatId),
    Special(SpecialStatId),
}

impl From<StatId> for StatAttribute {
    fn from(id: StatId) -> Self {
        StatAttribute::Normal(id)
    }
}

impl From<SpecialStatId> for StatAttribute {
    fn from(id: SpecialStatId) -> Self {
        StatAttribute::Special(id)
    }
}
