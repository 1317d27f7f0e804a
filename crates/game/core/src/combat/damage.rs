//! Damage formulas.

use crate::state::StatSheet;

/// Damage an autonomous attacker deals to the controlled entity.
///
/// ```text
/// damage = max(1, attack - defense)
/// ```
///
/// Defense can cancel the whole attack but at least one half-heart point is
/// always lost.
pub fn damage_to_controlled(attacker: &StatSheet, defender: &StatSheet) -> u32 {
    (attacker.attack - defender.defense).max(1) as u32
}

/// Damage the controlled entity deals to an autonomous entity: its attack,
/// flat. The defender's defense is not consulted.
pub fn damage_to_autonomous(attacker: &StatSheet) -> i32 {
    attacker.attack.max(0)
}

/// Damage per chop on an inner wall, independent of stats.
pub fn damage_to_obstacle(wall_damage: i32) -> i32 {
    wall_damage.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_damage_never_drops_below_one() {
        for attack in 0..12 {
            for defense in 0..12 {
                let attacker = StatSheet::new(attack, 0, 1);
                let defender = StatSheet::new(0, defense, 6);
                let expected = (attack - defense).max(1) as u32;
                assert_eq!(damage_to_controlled(&attacker, &defender), expected);
                assert!(damage_to_controlled(&attacker, &defender) >= 1);
            }
        }
    }

    #[test]
    fn autonomous_damage_ignores_defense() {
        let attacker = StatSheet::new(3, 0, 6);
        assert_eq!(damage_to_autonomous(&attacker), 3);
    }
}
