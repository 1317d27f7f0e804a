use crate::state::Position;

/// Walkable board size. Cells run from `(0, 0)` to `(width - 1, height - 1)`.
///
/// The outer ring of walkable cells is the border; it is never used for random
/// placement. Indestructible boundary walls surround the board one cell further
/// out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardDimensions {
    pub width: u32,
    pub height: u32,
}

impl BoardDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn is_border(&self, position: Position) -> bool {
        self.contains(position)
            && (position.x == 0
                || position.y == 0
                || position.x == self.width as i32 - 1
                || position.y == self.height as i32 - 1)
    }

    /// Cells eligible for random placement, in column-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Position> {
        let width = self.width as i32;
        let height = self.height as i32;
        (1..width - 1).flat_map(move |x| (1..height - 1).map(move |y| Position::new(x, y)))
    }

    pub fn interior_cell_count(&self) -> u32 {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// Where the controlled entity enters each floor.
    pub const fn entry(&self) -> Position {
        Position::ORIGIN
    }

    /// Fixed exit cell in the far corner.
    pub const fn exit(&self) -> Position {
        Position::new(self.width as i32 - 1, self.height as i32 - 1)
    }
}
