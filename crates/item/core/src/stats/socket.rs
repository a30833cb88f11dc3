//! Gem socket rolling.
//!
//! Earrings, rings, and pendants of sufficient rarity carry gem sockets.
//! Unlocking is a strict prefix: the unlock pass walks the sockets in order
//! and stops at the first failed roll, so socket `k` can only ever be open if
//! sockets `0..k` all opened first.

use crate::env::RngOracle;
use crate::item::{ItemId, ItemSlot};

/// A gemstone mounted in a socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gemstone {
    pub id: ItemId,
    /// Character the stone is bound to, if any.
    pub owner_id: Option<u64>,
    pub is_locked: bool,
    pub unlock_time: u64,
}

/// One gem socket on an accessory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemSocket {
    pub is_unlocked: bool,
    pub gemstone: Option<Gemstone>,
}

/// Chance (percent) that the unlock pass stops at a socket.
const UNLOCK_STOP_THRESHOLD: i32 = 95;

/// Roll the gem sockets for an item slot at a rarity.
///
/// Only earrings, rings, and pendants are eligible. Rarity 3 carries one
/// socket, anything above three, everything else none. Each socket then gets
/// an in-order unlock roll with a 5% success chance; the first failure ends
/// the pass and leaves the rest locked.
pub fn roll_gem_sockets<R>(slot: ItemSlot, rarity: u8, rng: &mut R) -> Vec<GemSocket>
where
    R: RngOracle,
{
    if !matches!(slot, ItemSlot::Earring | ItemSlot::Ring | ItemSlot::Pendant) {
        return Vec::new();
    }

    let count = match rarity {
        3 => 1,
        r if r > 3 => 3,
        _ => 0,
    };
    let mut sockets = vec![GemSocket::default(); count];

    for socket in &mut sockets {
        if rng.range_exclusive(0, 100) < UNLOCK_STOP_THRESHOLD {
            break;
        }
        socket.is_unlocked = true;
    }

    sockets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Pcg32;

    #[test]
    fn only_accessory_sockets_roll() {
        let mut rng = Pcg32::seeded(1);
        assert!(roll_gem_sockets(ItemSlot::RightHand, 5, &mut rng).is_empty());
        assert!(roll_gem_sockets(ItemSlot::Gloves, 5, &mut rng).is_empty());
        assert!(roll_gem_sockets(ItemSlot::Belt, 5, &mut rng).is_empty());
        assert!(roll_gem_sockets(ItemSlot::None, 5, &mut rng).is_empty());
    }

    #[test]
    fn socket_count_follows_rarity() {
        let mut rng = Pcg32::seeded(2);
        assert!(roll_gem_sockets(ItemSlot::Ring, 2, &mut rng).is_empty());
        assert_eq!(roll_gem_sockets(ItemSlot::Ring, 3, &mut rng).len(), 1);
        assert_eq!(roll_gem_sockets(ItemSlot::Ring, 4, &mut rng).len(), 3);
        assert_eq!(roll_gem_sockets(ItemSlot::Pendant, 6, &mut rng).len(), 3);
    }

    #[test]
    fn rarity_four_ring_always_has_three_sockets() {
        for seed in 0..500 {
            let mut rng = Pcg32::seeded(seed);
            let sockets = roll_gem_sockets(ItemSlot::Ring, 4, &mut rng);
            assert_eq!(sockets.len(), 3);
            assert!(sockets.iter().all(|socket| socket.gemstone.is_none()));
        }
    }

    #[test]
    fn unlocked_sockets_form_a_prefix() {
        let mut any_unlocked = false;
        for seed in 0..5_000 {
            let mut rng = Pcg32::seeded(seed);
            let sockets = roll_gem_sockets(ItemSlot::Earring, 5, &mut rng);
            for k in 1..sockets.len() {
                if sockets[k].is_unlocked {
                    assert!(
                        sockets[k - 1].is_unlocked,
                        "socket {k} unlocked without its prefix (seed {seed})"
                    );
                }
            }
            any_unlocked |= sockets[0].is_unlocked;
        }
        // With a 5% per-socket chance, 5000 trials virtually guarantee at
        // least one unlocked first socket.
        assert!(any_unlocked);
    }
}
