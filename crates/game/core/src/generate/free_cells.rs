use crate::env::{BoardDimensions, RngSource};
use crate::state::Position;

/// Interior cells still available for random placement on one floor.
///
/// Shrinks monotonically: every draw removes the drawn cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeCells {
    cells: Vec<Position>,
}

impl FreeCells {
    /// Every interior cell of `board`, excluding the one-cell border.
    pub fn from_board(board: &BoardDimensions) -> Self {
        Self {
            cells: board.interior_cells().collect(),
        }
    }

    /// Removes and returns a random cell, or `None` once empty.
    pub fn draw(&mut self, rng: &mut impl RngSource) -> Option<Position> {
        if self.cells.is_empty() {
            return None;
        }
        let index = rng.index(self.cells.len());
        Some(self.cells.swap_remove(index))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
