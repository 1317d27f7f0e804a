use crate::env::BoardDimensions;
use crate::state::{BodyRef, CollisionLayer, GridDelta, Position, TileMap};

/// Outcome of probing a straight-line move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveProbe {
    pub origin: Position,
    pub destination: Position,
    /// First blocking body along the line, if any.
    pub blocker: Option<BodyRef>,
}

impl MoveProbe {
    pub fn is_blocked(&self) -> bool {
        self.blocker.is_some()
    }
}

/// Tests the straight line from `origin` to `origin + delta` against the
/// blocking layer.
///
/// The mover's own body is excluded. Cells outside the board report
/// [`BodyRef::Boundary`]. When something blocks, the probe still names it so
/// the caller can attack, pick up or chop.
pub fn try_move(
    map: &TileMap,
    board: &BoardDimensions,
    mover: BodyRef,
    origin: Position,
    delta: GridDelta,
) -> MoveProbe {
    let destination = origin.offset(delta);
    let steps = delta.length();
    let step = GridDelta::new(delta.dx.signum(), delta.dy.signum());

    let mut cell = origin;
    let mut blocker = None;
    for _ in 0..steps {
        cell = cell.offset(step);
        if !board.contains(cell) {
            blocker = Some(BodyRef::Boundary);
            break;
        }
        if let Some(body) = map.first_on(cell, CollisionLayer::BLOCKING, Some(mover)) {
            blocker = Some(body);
            break;
        }
    }

    MoveProbe {
        origin,
        destination,
        blocker,
    }
}
