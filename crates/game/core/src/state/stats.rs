//! Combat numbers and the additive arithmetic used by equipment.
//!
//! Equipment bonuses are applied and reverted with plain integer addition so
//! that equipping and later replacing an item leaves the sheet exactly where
//! it would be had the first item never been worn.

/// Additive modifier carried by an equipment item.
///
/// `hearts` is expressed in half-heart points (2 = one displayed heart).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StatBonus {
    pub attack: i32,
    pub defense: i32,
    pub hearts: i32,
}

impl StatBonus {
    pub const NONE: Self = Self {
        attack: 0,
        defense: 0,
        hearts: 0,
    };

    pub const fn attack(attack: i32) -> Self {
        Self {
            attack,
            defense: 0,
            hearts: 0,
        }
    }

    pub const fn defense(defense: i32) -> Self {
        Self {
            attack: 0,
            defense,
            hearts: 0,
        }
    }

    pub const fn hearts(hearts: i32) -> Self {
        Self {
            attack: 0,
            defense: 0,
            hearts,
        }
    }

    /// Returns true if this bonus changes the heart capacity.
    pub const fn affects_hearts(&self) -> bool {
        self.hearts != 0
    }
}

/// An entity's combat numbers.
///
/// For the controlled entity `hit_points` is the heart capacity in half-heart
/// points; for autonomous entities it is the remaining integer health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StatSheet {
    pub attack: i32,
    pub defense: i32,
    pub hit_points: i32,
}

impl StatSheet {
    pub const fn new(attack: i32, defense: i32, hit_points: i32) -> Self {
        Self {
            attack,
            defense,
            hit_points,
        }
    }

    /// Adds an equipment bonus to the totals.
    pub fn apply(&mut self, bonus: &StatBonus) {
        self.attack += bonus.attack;
        self.defense += bonus.defense;
        self.hit_points += bonus.hearts;
    }

    /// Removes a previously applied equipment bonus.
    pub fn revert(&mut self, bonus: &StatBonus) {
        self.attack -= bonus.attack;
        self.defense -= bonus.defense;
        self.hit_points -= bonus.hearts;
    }

    /// Subtracts `damage` from hit points and reports whether they are depleted.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.hit_points -= damage;
        self.is_depleted()
    }

    pub const fn is_depleted(&self) -> bool {
        self.hit_points <= 0
    }
}
