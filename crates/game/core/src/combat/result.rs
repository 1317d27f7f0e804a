//! Applying damage and resolving what it leaves behind.

use crate::state::{ControlledEntity, StatSheet};

use super::damage::damage_to_autonomous;

/// Outcome of the controlled entity losing half-heart points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WoundOutcome {
    /// Health left after the hit.
    Survived { remaining: u32 },
    /// Health ran out and a spare life refilled the track.
    LifeConsumed { restored: u32, lives_left: u32 },
    /// Health ran out with no spare life.
    Defeated,
}

/// Outcome of the controlled entity striking an autonomous entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeOutcome {
    pub damage: i32,
    pub remaining: i32,
    pub killed: bool,
}

/// Drains `damage` half-heart points from the back of the track, then
/// consumes a spare life if health ran out.
///
/// Returns the points actually removed together with the outcome.
pub fn wound_controlled(target: &mut ControlledEntity, damage: u32) -> (u32, WoundOutcome) {
    let removed = target.hearts.damage(damage);
    if !target.hearts.is_depleted() {
        let remaining = target.hearts.total();
        return (removed, WoundOutcome::Survived { remaining });
    }

    if target.lives == 0 {
        target.alive = false;
        return (removed, WoundOutcome::Defeated);
    }

    target.lives -= 1;
    let restored = target.hearts.refill();
    (
        removed,
        WoundOutcome::LifeConsumed {
            restored,
            lives_left: target.lives,
        },
    )
}

/// Applies a flat strike from `attacker` to `target`.
pub fn strike_autonomous(attacker: &StatSheet, target: &mut StatSheet) -> StrikeOutcome {
    let damage = damage_to_autonomous(attacker);
    let killed = target.take_hit(damage);
    StrikeOutcome {
        damage,
        remaining: target.hit_points,
        killed,
    }
}
