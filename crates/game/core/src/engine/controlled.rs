//! Resolution of the controlled entity's intent.

use crate::combat::{WoundOutcome, damage_to_obstacle, strike_autonomous};
use crate::env::ConsumableEffect;
use crate::events::{AudioCue, HudEvent, MusicTrack, Signal};
use crate::grid::{Interaction, try_move};
use crate::state::{
    BodyRef, CardinalDirection, CollisionLayer, EntityId, EquipmentId, Intent, Motion, Position,
    SlotKind, Tick,
};

use super::{FloorEngine, IntentError, TurnPhase};

/// What a consumed controlled turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// Stepped into a free cell.
    Moved { to: Position },
    /// Hit an inner wall.
    Chopped { obstacle: EntityId, destroyed: bool },
    /// Picked up equipment lying in the way.
    Equipped {
        slot: SlotKind,
        item: EquipmentId,
        replaced: Option<EquipmentId>,
    },
    /// Struck an autonomous entity.
    Attacked {
        target: EntityId,
        damage: i32,
        killed: bool,
    },
    /// Walked into the boundary or another body with no interaction.
    Bumped,
}

/// Result of an accepted intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub direction: CardinalDirection,
    pub outcome: TurnOutcome,
    /// Phase after the turn was consumed.
    pub phase: TurnPhase,
}

impl FloorEngine {
    /// Applies one intent from the controlled entity.
    ///
    /// The intent is tested against the blocking layer; a free cell is
    /// entered, otherwise the first interaction by priority (obstacle,
    /// pickup, hostile) fires. Either way the turn is consumed and the
    /// autonomous sweep opens, unless the floor ended. Rejected intents leave
    /// the turn untouched.
    pub fn submit_intent(&mut self, intent: Intent, now: Tick) -> Result<TurnReport, IntentError> {
        self.clock = self.clock.max(now);
        self.settle_motions(now);

        let phase = self.phase();
        if phase != TurnPhase::ControlledTurn {
            return Err(IntentError::NotControlledTurn(phase));
        }
        let direction = intent.direction().ok_or(IntentError::NoDirection)?;
        if self.controlled.motion.is_moving() {
            return Err(IntentError::StillMoving);
        }

        self.clamp_controlled_hearts();

        let origin = self.controlled.position;
        let probe = try_move(
            &self.map,
            &self.config.board,
            BodyRef::Controlled,
            origin,
            direction.delta(),
        );

        let outcome = match probe.blocker {
            None => {
                self.move_controlled(origin, probe.destination, now);
                TurnOutcome::Moved {
                    to: probe.destination,
                }
            }
            Some(BodyRef::Boundary) => TurnOutcome::Bumped,
            Some(_) => {
                let bodies = self.map.bodies(probe.destination).filter(|body| {
                    *body != BodyRef::Controlled && body.layer().contains(CollisionLayer::BLOCKING)
                });
                match Interaction::classify(bodies) {
                    Some(Interaction::Obstacle(id)) => self.chop(id),
                    Some(Interaction::Pickup(id)) => self.pick_up(id)?,
                    Some(Interaction::Hostile(id)) => self.strike(id),
                    None => TurnOutcome::Bumped,
                }
            }
        };

        if let TurnOutcome::Moved { to } = outcome {
            self.trigger_cell(to);
        }
        if !self.phase().is_final() {
            // The phase was checked above, so the sweep always opens here.
            let _ = self.scheduler.end_controlled_turn(now);
        }

        Ok(TurnReport {
            direction,
            outcome,
            phase: self.phase(),
        })
    }

    /// Drops health stored above the current capacity, e.g. after swapping
    /// away a heart pendant.
    fn clamp_controlled_hearts(&mut self) {
        let drained = self.controlled.hearts.clamp_to_capacity();
        if drained > 0 {
            self.publish(HudEvent::Damaged {
                amount: drained,
                remaining: self.controlled.hearts.total(),
            });
        }
    }

    fn move_controlled(&mut self, from: Position, to: Position, now: Tick) {
        self.map.relocate(from, to, BodyRef::Controlled);
        self.controlled.position = to;
        let duration = self.controlled.move_time;
        self.controlled.motion = Motion::start(from, to, now, duration);
        self.emit(Signal::Moved {
            entity: EntityId::CONTROLLED,
            from,
            to,
            duration,
        });
        self.emit(Signal::Cue(AudioCue::Move));
    }

    fn chop(&mut self, id: EntityId) -> TurnOutcome {
        let damage = damage_to_obstacle(self.config.wall_damage);
        let Some(obstacle) = self
            .obstacles
            .iter_mut()
            .find(|obstacle| obstacle.id == id && obstacle.active)
        else {
            return TurnOutcome::Bumped;
        };

        obstacle.hit_points -= damage;
        let remaining = obstacle.hit_points;
        let position = obstacle.position;
        let destroyed = remaining <= 0;
        if destroyed {
            obstacle.active = false;
            self.map.remove(position, BodyRef::Obstacle(id));
        }

        self.emit(Signal::Attack {
            attacker: EntityId::CONTROLLED,
            target: id,
        });
        self.emit(Signal::ObstacleDamaged {
            obstacle: id,
            remaining,
        });
        self.emit(Signal::Cue(AudioCue::Chop));
        TurnOutcome::Chopped {
            obstacle: id,
            destroyed,
        }
    }

    /// Equips the item of pickup `id`, swapping out whatever held its slot.
    fn pick_up(&mut self, id: EntityId) -> Result<TurnOutcome, IntentError> {
        let Some(index) = self
            .equipment
            .iter()
            .position(|drop| drop.id == id && drop.active)
        else {
            return Ok(TurnOutcome::Bumped);
        };
        let drop = self.equipment[index];
        let catalog = std::sync::Arc::clone(&self.catalogs.equipment);
        let item = catalog
            .get(drop.equipment)
            .ok_or(IntentError::UnknownEquipment(drop.equipment))?;

        let slot = item.slot;
        let replaced = self.controlled.slots.get(slot);
        let replaced_bonus = replaced
            .and_then(|previous| catalog.get(previous))
            .map(|previous| previous.bonus);

        if let Some(bonus) = replaced_bonus.as_ref() {
            self.controlled.stats.revert(bonus);
        }
        if let Some(previous) = replaced {
            self.emit(Signal::EquipmentReleased { item: previous });
        }
        self.controlled.stats.apply(&item.bonus);
        self.controlled.slots.replace(slot, item.id);
        self.controlled.sync_capacity();

        self.equipment[index].active = false;
        self.map.remove(drop.position, BodyRef::Equipment(id));

        self.publish(HudEvent::Equipped {
            slot,
            item: item.id,
            replaced,
        });
        let hearts_changed = item.bonus.affects_hearts()
            || replaced_bonus.is_some_and(|bonus| bonus.affects_hearts());
        if hearts_changed {
            self.publish(HudEvent::MaxHeartsChanged {
                max_halves: self.controlled.hearts.max_halves(),
            });
        }

        Ok(TurnOutcome::Equipped {
            slot,
            item: item.id,
            replaced,
        })
    }

    fn strike(&mut self, id: EntityId) -> TurnOutcome {
        let attacker = self.controlled.stats;
        let Some(index) = self.autonomous.iter().position(|entity| entity.id == id) else {
            return TurnOutcome::Bumped;
        };

        let outcome = strike_autonomous(&attacker, &mut self.autonomous[index].stats);
        self.emit(Signal::Attack {
            attacker: EntityId::CONTROLLED,
            target: id,
        });
        self.emit(Signal::Hit { entity: id });

        if outcome.killed {
            let entity = self.autonomous.remove(index);
            self.map.remove(entity.position, BodyRef::Autonomous(id));
            self.scheduler.deregister(id);
            self.emit(Signal::Death { entity: id });
        }

        TurnOutcome::Attacked {
            target: id,
            damage: outcome.damage,
            killed: outcome.killed,
        }
    }

    /// Fires consumables and the exit on the cell just entered.
    fn trigger_cell(&mut self, cell: Position) {
        let triggers: Vec<BodyRef> = self
            .map
            .bodies(cell)
            .filter(|body| body.layer().contains(CollisionLayer::TRIGGER))
            .collect();

        for trigger in triggers {
            match trigger {
                BodyRef::Consumable(id) => self.consume(id),
                BodyRef::Exit => self.reach_exit(),
                _ => {}
            }
        }
    }

    fn consume(&mut self, id: EntityId) {
        let Some(index) = self
            .consumables
            .iter()
            .position(|drop| drop.id == id && drop.active)
        else {
            return;
        };
        let drop = self.consumables[index];
        self.consumables[index].active = false;
        self.map.remove(drop.position, BodyRef::Consumable(id));

        match drop.kind.effect() {
            ConsumableEffect::Heal(amount) => {
                let healed = self.controlled.hearts.heal(amount);
                self.publish(HudEvent::Healed {
                    amount: healed,
                    total: self.controlled.hearts.total(),
                });
            }
            ConsumableEffect::ExtraLife => self.controlled.lives += 1,
        }

        self.emit(Signal::ItemConsumed {
            item: id,
            kind: drop.kind,
        });
        self.emit(Signal::Cue(drop.kind.cue()));
    }

    fn reach_exit(&mut self) {
        let phase = if self.is_boss_floor() {
            TurnPhase::Won
        } else {
            TurnPhase::FloorComplete
        };
        self.scheduler.halt(phase);
        if phase == TurnPhase::Won {
            self.emit(Signal::Music(MusicTrack::Silence));
        }
    }

    /// Applies a hit on the controlled entity and resolves lives.
    pub(super) fn wound(&mut self, damage: u32) {
        let (removed, outcome) = crate::combat::wound_controlled(&mut self.controlled, damage);
        let remaining = match outcome {
            WoundOutcome::Survived { remaining } => remaining,
            WoundOutcome::LifeConsumed { .. } | WoundOutcome::Defeated => 0,
        };
        self.publish(HudEvent::Damaged {
            amount: removed,
            remaining,
        });

        match outcome {
            WoundOutcome::Survived { .. } => {}
            WoundOutcome::LifeConsumed { restored, .. } => {
                self.publish(HudEvent::Healed {
                    amount: restored,
                    total: self.controlled.hearts.total(),
                });
            }
            WoundOutcome::Defeated => {
                self.scheduler.halt(TurnPhase::GameOver);
                self.emit(Signal::Death {
                    entity: EntityId::CONTROLLED,
                });
                self.emit(Signal::Cue(AudioCue::GameOver));
                self.emit(Signal::Music(MusicTrack::Silence));
            }
        }
    }
}
