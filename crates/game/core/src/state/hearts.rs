//! Health modelled as a row of heart units holding half-heart points.
//!
//! Damage drains from the last unit backward and healing fills from the first
//! unit forward. The asymmetry decides which displayed heart empties or fills
//! first and must be kept.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Half-heart points held by one full heart unit.
pub const HALVES_PER_UNIT: u8 = 2;

type HeartUnits = ArrayVec<u8, { GameConfig::MAX_HEART_UNITS }>;

/// Ordered heart units plus a capacity expressed in half-heart points.
///
/// # Invariants
///
/// - every unit holds 0, 1 or 2 half-heart points
/// - `damage` and `heal` never push the stored total above `max_halves`
/// - lowering the capacity never removes units (see [`HeartTrack::set_capacity`])
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartTrack {
    units: HeartUnits,
    max_halves: u32,
}

impl HeartTrack {
    /// Largest capacity a track can represent.
    pub const HARD_CAP: u32 = (GameConfig::MAX_HEART_UNITS as u32) * HALVES_PER_UNIT as u32;

    /// Builds a track holding `current` half-hearts out of `max_halves`.
    ///
    /// Full units come first, then a half unit if `current` is odd, then empty
    /// containers up to the capacity.
    pub fn new(current: u32, max_halves: u32) -> Self {
        let mut track = Self {
            units: HeartUnits::new(),
            max_halves: max_halves.min(Self::HARD_CAP),
        };
        track.ensure_units();
        track.heal(current);
        track
    }

    /// Removes up to `amount` half-heart points starting from the last unit.
    ///
    /// Returns the number of points actually removed.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let mut remaining = amount;
        for unit in self.units.iter_mut().rev() {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(u32::from(*unit));
            *unit -= taken as u8;
            remaining -= taken;
        }
        amount - remaining
    }

    /// Adds up to `amount` half-heart points starting from the first unit.
    ///
    /// Healing stops at the capacity. Returns the number of points added.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let headroom = self.max_halves.saturating_sub(self.total());
        let budget = amount.min(headroom);
        let mut remaining = budget;
        for unit in self.units.iter_mut() {
            if remaining == 0 {
                break;
            }
            let missing = u32::from(HALVES_PER_UNIT - *unit);
            let added = remaining.min(missing);
            *unit += added as u8;
            remaining -= added;
        }
        budget - remaining
    }

    /// Refills the track to capacity. Returns the points added.
    pub fn refill(&mut self) -> u32 {
        self.heal(self.max_halves)
    }

    /// Changes the capacity.
    ///
    /// Growing appends empty containers. Shrinking only lowers the cap; units
    /// and their stored points are left in place.
    pub fn set_capacity(&mut self, max_halves: u32) {
        self.max_halves = max_halves.min(Self::HARD_CAP);
        self.ensure_units();
    }

    /// Drains any points stored above the capacity from the end of the track.
    ///
    /// Returns the number of points drained.
    pub fn clamp_to_capacity(&mut self) -> u32 {
        let excess = self.total().saturating_sub(self.max_halves);
        if excess == 0 {
            return 0;
        }
        self.damage(excess)
    }

    /// Total stored half-heart points.
    pub fn total(&self) -> u32 {
        self.units.iter().map(|unit| u32::from(*unit)).sum()
    }

    pub fn max_halves(&self) -> u32 {
        self.max_halves
    }

    pub fn units(&self) -> &[u8] {
        &self.units
    }

    pub fn is_depleted(&self) -> bool {
        self.total() == 0
    }

    fn ensure_units(&mut self) {
        while (self.units.len() as u32) * u32::from(HALVES_PER_UNIT) < self.max_halves {
            if self.units.try_push(0).is_err() {
                break;
            }
        }
    }
}

impl Default for HeartTrack {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_total_lays_out_half_unit_last() {
        let track = HeartTrack::new(5, 6);
        assert_eq!(track.units(), &[2, 2, 1]);
        assert_eq!(track.total(), 5);
    }

    #[test]
    fn empty_containers_fill_up_to_capacity() {
        let track = HeartTrack::new(2, 6);
        assert_eq!(track.units(), &[2, 0, 0]);
    }

    #[test]
    fn damage_empties_last_unit_before_touching_previous() {
        let mut track = HeartTrack::new(6, 6);

        track.damage(1);
        assert_eq!(track.units(), &[2, 2, 1]);

        track.damage(1);
        assert_eq!(track.units(), &[2, 2, 0]);

        track.damage(1);
        assert_eq!(track.units(), &[2, 1, 0]);
    }

    #[test]
    fn damage_spills_backward_and_saturates() {
        let mut track = HeartTrack::new(5, 6);
        assert_eq!(track.damage(3), 3);
        assert_eq!(track.units(), &[2, 0, 0]);

        assert_eq!(track.damage(10), 2);
        assert_eq!(track.units(), &[0, 0, 0]);
        assert!(track.is_depleted());
    }

    #[test]
    fn heal_fills_first_unit_first() {
        let mut track = HeartTrack::new(0, 6);
        track.heal(1);
        assert_eq!(track.units(), &[1, 0, 0]);
        track.heal(2);
        assert_eq!(track.units(), &[2, 1, 0]);
    }

    #[test]
    fn heal_stops_at_capacity() {
        let mut track = HeartTrack::new(4, 5);
        assert_eq!(track.units(), &[2, 2, 0]);
        assert_eq!(track.heal(6), 1);
        assert_eq!(track.units(), &[2, 2, 1]);
        assert_eq!(track.total(), 5);
    }

    #[test]
    fn growing_capacity_appends_empty_units() {
        let mut track = HeartTrack::new(6, 6);
        track.set_capacity(8);
        assert_eq!(track.units(), &[2, 2, 2, 0]);
        track.refill();
        assert_eq!(track.total(), 8);
    }

    #[test]
    fn shrinking_capacity_keeps_units() {
        let mut track = HeartTrack::new(8, 8);
        track.set_capacity(6);
        assert_eq!(track.units(), &[2, 2, 2, 2]);
        assert_eq!(track.max_halves(), 6);

        assert_eq!(track.clamp_to_capacity(), 2);
        assert_eq!(track.units(), &[2, 2, 2, 0]);
    }

    #[test]
    fn arbitrary_sequences_respect_unit_bounds_and_capacity() {
        let mut track = HeartTrack::new(3, 7);
        let script: [(bool, u32); 12] = [
            (true, 9),
            (false, 4),
            (true, 1),
            (false, 2),
            (false, 7),
            (true, 3),
            (true, 3),
            (false, 1),
            (true, 20),
            (false, 5),
            (true, 2),
            (false, 0),
        ];

        for (heal, amount) in script {
            if heal {
                track.heal(amount);
            } else {
                track.damage(amount);
            }
            assert!(track.units().iter().all(|unit| *unit <= HALVES_PER_UNIT));
            assert!(track.total() <= track.max_halves());
        }
    }
}
