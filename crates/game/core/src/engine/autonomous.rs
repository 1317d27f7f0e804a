//! Moves taken by autonomous entities during a sweep.

use crate::combat::damage_to_controlled;
use crate::events::{AudioCue, Signal};
use crate::grid::try_move;
use crate::state::{BodyRef, CardinalDirection, EntityId, Motion, Position, Tick};

use super::FloorEngine;

/// Greedy step from `from` toward `target`.
///
/// Closes the horizontal gap first; once aligned on the column, moves
/// vertically.
pub(crate) fn chase_direction(from: Position, target: Position) -> CardinalDirection {
    let dx = target.x - from.x;
    if dx != 0 {
        if dx > 0 {
            CardinalDirection::East
        } else {
            CardinalDirection::West
        }
    } else if target.y > from.y {
        CardinalDirection::North
    } else {
        CardinalDirection::South
    }
}

impl FloorEngine {
    /// Takes `id`'s single move in the current sweep.
    ///
    /// Every other call is a settle skip, starting with the first one after
    /// the entity was created.
    pub(super) fn act_autonomous(&mut self, id: EntityId, now: Tick) {
        let Some(index) = self.autonomous.iter().position(|entity| entity.id == id) else {
            return;
        };

        let entity = &mut self.autonomous[index];
        if entity.skip_move {
            entity.skip_move = false;
            return;
        }
        entity.skip_move = true;
        if entity.motion.is_moving() {
            return;
        }

        let origin = entity.position;
        let direction = chase_direction(origin, self.controlled.position);
        let probe = try_move(
            &self.map,
            &self.config.board,
            BodyRef::Autonomous(id),
            origin,
            direction.delta(),
        );

        match probe.blocker {
            None => {
                let entity = &mut self.autonomous[index];
                let duration = entity.move_time;
                entity.position = probe.destination;
                entity.motion = Motion::start(origin, probe.destination, now, duration);
                self.map
                    .relocate(origin, probe.destination, BodyRef::Autonomous(id));
                self.emit(Signal::Moved {
                    entity: id,
                    from: origin,
                    to: probe.destination,
                    duration,
                });
            }
            Some(BodyRef::Controlled) => {
                let damage =
                    damage_to_controlled(&self.autonomous[index].stats, &self.controlled.stats);
                self.emit(Signal::Attack {
                    attacker: id,
                    target: EntityId::CONTROLLED,
                });
                self.emit(Signal::Cue(AudioCue::EnemyAttack));
                self.emit(Signal::Hit {
                    entity: EntityId::CONTROLLED,
                });
                self.wound(damage);
            }
            Some(_) => {}
        }
    }
}
