use std::fmt;

/// Unique identifier for any entity placed on a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controlled entity.
    pub const CONTROLLED: Self = Self(0);

    /// Returns true if this entity is the controlled entity.
    #[inline]
    pub const fn is_controlled(self) -> bool {
        self.0 == Self::CONTROLLED.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::CONTROLLED
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell reached by applying `delta` to this position.
    pub const fn offset(self, delta: GridDelta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell offset applied by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDelta {
    pub dx: i32,
    pub dy: i32,
}

impl GridDelta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Number of cells crossed along the line (Chebyshev length).
    pub fn length(self) -> i32 {
        self.dx.abs().max(self.dy.abs())
    }
}

/// Four-way movement direction. Diagonals do not exist on this grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub const fn delta(self) -> GridDelta {
        match self {
            CardinalDirection::North => GridDelta::new(0, 1),
            CardinalDirection::South => GridDelta::new(0, -1),
            CardinalDirection::East => GridDelta::new(1, 0),
            CardinalDirection::West => GridDelta::new(-1, 0),
        }
    }
}

/// Raw per-frame intent from the input source.
///
/// Axis values are interpreted by sign only. When both axes are non-zero the
/// horizontal axis wins and the vertical one is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intent {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Intent {
    pub const NONE: Self = Self {
        horizontal: 0,
        vertical: 0,
    };

    pub const fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn toward(direction: CardinalDirection) -> Self {
        let delta = direction.delta();
        Self::new(delta.dx, delta.dy)
    }

    /// Resolves the intent to a single cardinal direction, or `None` when idle.
    pub fn direction(self) -> Option<CardinalDirection> {
        match (self.horizontal.signum(), self.vertical.signum()) {
            (1, _) => Some(CardinalDirection::East),
            (-1, _) => Some(CardinalDirection::West),
            (_, 1) => Some(CardinalDirection::North),
            (_, -1) => Some(CardinalDirection::South),
            _ => None,
        }
    }
}

/// Simulation time in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    pub fn saturating_sub(self, rhs: Tick) -> Tick {
        Tick(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Add for Tick {
    type Output = Tick;
    fn add(self, rhs: Tick) -> Tick {
        Tick(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Tick {
    fn add_assign(&mut self, rhs: Tick) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_axis_wins_over_vertical() {
        assert_eq!(
            Intent::new(1, 1).direction(),
            Some(CardinalDirection::East)
        );
        assert_eq!(
            Intent::new(-1, -1).direction(),
            Some(CardinalDirection::West)
        );
        assert_eq!(Intent::new(0, 1).direction(), Some(CardinalDirection::North));
        assert_eq!(Intent::new(0, -3).direction(), Some(CardinalDirection::South));
        assert_eq!(Intent::NONE.direction(), None);
    }

    #[test]
    fn toward_round_trips_every_direction() {
        for direction in CardinalDirection::ALL {
            assert_eq!(Intent::toward(direction).direction(), Some(direction));
        }
    }
}
