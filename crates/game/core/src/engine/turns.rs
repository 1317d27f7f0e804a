use crate::state::{EntityId, Tick};

use super::TurnError;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// Floor is loading or tearing down; nothing moves.
    Setup,
    /// Waiting for one intent from the controlled entity.
    ControlledTurn,
    /// Autonomous entities act one at a time.
    AutonomousSweep,
    /// The controlled entity reached the exit of a regular floor.
    FloorComplete,
    /// Out of hearts and lives.
    GameOver,
    /// Exit of the boss floor reached.
    Won,
}

impl TurnPhase {
    /// No further turns are processed on this floor.
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            TurnPhase::FloorComplete | TurnPhase::GameOver | TurnPhase::Won
        )
    }

    /// The run is over.
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::GameOver | TurnPhase::Won)
    }
}

/// What the driver should do next during a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepStep {
    /// Let this entity take its move now.
    Act(EntityId),
    /// Nothing is due before this tick.
    Wait(Tick),
    /// The sweep ended and control went back to the controlled entity.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SweepCursor {
    next: usize,
    resume_at: Tick,
}

/// Alternates a single controlled turn with a paced sweep over every
/// registered autonomous entity.
///
/// The scheduler never sleeps: it records when the next step is due and the
/// driver polls it with the current time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnScheduler {
    phase: TurnPhase,
    roster: Vec<EntityId>,
    setup_until: Option<Tick>,
    sweep: Option<SweepCursor>,
    turn_delay: Tick,
    sweeps_completed: u64,
}

impl TurnScheduler {
    /// Starts in [`TurnPhase::Setup`] with no release time.
    pub fn new(turn_delay: Tick) -> Self {
        Self {
            phase: TurnPhase::Setup,
            roster: Vec::new(),
            setup_until: None,
            sweep: None,
            turn_delay,
            sweeps_completed: 0,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Registered autonomous entities in registration order.
    pub fn roster(&self) -> &[EntityId] {
        &self.roster
    }

    pub fn sweeps_completed(&self) -> u64 {
        self.sweeps_completed
    }

    pub fn register(&mut self, entity: EntityId) {
        if !self.roster.contains(&entity) {
            self.roster.push(entity);
        }
    }

    /// Removes `entity` from the sweep. An in-flight sweep keeps its place.
    pub fn deregister(&mut self, entity: EntityId) -> bool {
        let Some(index) = self.roster.iter().position(|id| *id == entity) else {
            return false;
        };
        self.roster.remove(index);
        if let Some(cursor) = self.sweep.as_mut() {
            if index < cursor.next {
                cursor.next -= 1;
            }
        }
        true
    }

    /// Enters [`TurnPhase::Setup`] until `until`. Cancels any sweep.
    pub fn begin_setup(&mut self, until: Tick) {
        self.phase = TurnPhase::Setup;
        self.setup_until = Some(until);
        self.sweep = None;
    }

    /// Releases the setup hold once `now` has reached the release time.
    ///
    /// Returns true if control passed to the controlled entity.
    pub fn complete_setup(&mut self, now: Tick) -> bool {
        if self.phase != TurnPhase::Setup {
            return false;
        }
        match self.setup_until {
            Some(until) if now >= until => {
                self.setup_until = None;
                self.phase = TurnPhase::ControlledTurn;
                true
            }
            _ => false,
        }
    }

    /// Hands control to the controlled entity. Refused during setup and in
    /// final phases.
    pub fn enter_controlled_turn(&mut self) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::Setup => Err(TurnError::SetupInProgress),
            phase if phase.is_final() => Err(TurnError::Terminal(phase)),
            _ => {
                self.phase = TurnPhase::ControlledTurn;
                self.sweep = None;
                Ok(())
            }
        }
    }

    /// Consumes the controlled turn and opens a sweep.
    ///
    /// The first entity may act one turn delay after `now`; an empty roster
    /// waits a second turn delay before control returns.
    pub fn end_controlled_turn(&mut self, now: Tick) -> Result<(), TurnError> {
        if self.phase != TurnPhase::ControlledTurn {
            return Err(TurnError::UnexpectedPhase {
                expected: TurnPhase::ControlledTurn,
                actual: self.phase,
            });
        }

        let mut resume_at = now + self.turn_delay;
        if self.roster.is_empty() {
            resume_at += self.turn_delay;
        }
        self.phase = TurnPhase::AutonomousSweep;
        self.sweep = Some(SweepCursor { next: 0, resume_at });
        Ok(())
    }

    /// Advances the sweep at `now`.
    ///
    /// `move_delay` gives the pause after an entity acts. Returns `None`
    /// outside of a sweep.
    pub fn poll_sweep(
        &mut self,
        now: Tick,
        move_delay: impl Fn(EntityId) -> Tick,
    ) -> Option<SweepStep> {
        if self.phase != TurnPhase::AutonomousSweep {
            return None;
        }
        let cursor = self.sweep.as_mut()?;
        if now < cursor.resume_at {
            return Some(SweepStep::Wait(cursor.resume_at));
        }

        if let Some(entity) = self.roster.get(cursor.next).copied() {
            cursor.next += 1;
            cursor.resume_at = now + move_delay(entity);
            return Some(SweepStep::Act(entity));
        }

        self.sweeps_completed += 1;
        match self.enter_controlled_turn() {
            Ok(()) => Some(SweepStep::Finished),
            Err(_) => None,
        }
    }

    /// Freezes the floor in a final phase.
    pub fn halt(&mut self, phase: TurnPhase) {
        debug_assert!(phase.is_final());
        self.phase = phase;
        self.sweep = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Tick = Tick(100);

    fn ready_scheduler(roster: &[u32]) -> TurnScheduler {
        let mut scheduler = TurnScheduler::new(DELAY);
        for id in roster {
            scheduler.register(EntityId(*id));
        }
        scheduler.begin_setup(Tick(500));
        assert!(scheduler.complete_setup(Tick(500)));
        scheduler
    }

    fn run_sweep(scheduler: &mut TurnScheduler, start: Tick) -> (Vec<EntityId>, Tick) {
        let mut now = start;
        let mut acted = Vec::new();
        loop {
            match scheduler.poll_sweep(now, |_| Tick(50)) {
                Some(SweepStep::Act(id)) => acted.push(id),
                Some(SweepStep::Wait(until)) => now = until,
                Some(SweepStep::Finished) => return (acted, now),
                None => panic!("sweep stalled"),
            }
        }
    }

    #[test]
    fn setup_holds_until_release_time() {
        let mut scheduler = TurnScheduler::new(DELAY);
        scheduler.begin_setup(Tick(500));
        assert!(!scheduler.complete_setup(Tick(499)));
        assert_eq!(scheduler.phase(), TurnPhase::Setup);
        assert!(scheduler.complete_setup(Tick(500)));
        assert_eq!(scheduler.phase(), TurnPhase::ControlledTurn);
    }

    #[test]
    fn controlled_turn_is_refused_during_setup() {
        let mut scheduler = TurnScheduler::new(DELAY);
        assert_eq!(
            scheduler.enter_controlled_turn(),
            Err(TurnError::SetupInProgress)
        );
    }

    #[test]
    fn sweep_visits_each_entity_once_in_registration_order() {
        for k in 0..5u32 {
            let roster: Vec<u32> = (1..=k).rev().collect();
            let mut scheduler = ready_scheduler(&roster);
            scheduler.end_controlled_turn(Tick(1000)).unwrap();

            let (acted, _) = run_sweep(&mut scheduler, Tick(1000));
            let expected: Vec<EntityId> = roster.iter().map(|id| EntityId(*id)).collect();
            assert_eq!(acted, expected);
            assert_eq!(scheduler.phase(), TurnPhase::ControlledTurn);
            assert_eq!(scheduler.sweeps_completed(), 1);
        }
    }

    #[test]
    fn empty_sweep_waits_a_full_extra_delay() {
        let mut scheduler = ready_scheduler(&[]);
        scheduler.end_controlled_turn(Tick(1000)).unwrap();

        assert_eq!(
            scheduler.poll_sweep(Tick(1000), |_| Tick(0)),
            Some(SweepStep::Wait(Tick(1200)))
        );
        assert_eq!(
            scheduler.poll_sweep(Tick(1200), |_| Tick(0)),
            Some(SweepStep::Finished)
        );
    }

    #[test]
    fn entities_are_paced_by_their_move_delay() {
        let mut scheduler = ready_scheduler(&[1, 2]);
        scheduler.end_controlled_turn(Tick(0)).unwrap();

        assert_eq!(
            scheduler.poll_sweep(Tick(0), |_| Tick(50)),
            Some(SweepStep::Wait(Tick(100)))
        );
        assert_eq!(
            scheduler.poll_sweep(Tick(100), |_| Tick(50)),
            Some(SweepStep::Act(EntityId(1)))
        );
        assert_eq!(
            scheduler.poll_sweep(Tick(120), |_| Tick(50)),
            Some(SweepStep::Wait(Tick(150)))
        );
    }

    #[test]
    fn deregistering_mid_sweep_keeps_the_cursor_in_place() {
        let mut scheduler = ready_scheduler(&[1, 2, 3]);
        scheduler.end_controlled_turn(Tick(0)).unwrap();
        assert_eq!(
            scheduler.poll_sweep(Tick(100), |_| Tick(0)),
            Some(SweepStep::Act(EntityId(1)))
        );

        assert!(scheduler.deregister(EntityId(1)));
        assert_eq!(
            scheduler.poll_sweep(Tick(100), |_| Tick(0)),
            Some(SweepStep::Act(EntityId(2)))
        );
        assert_eq!(
            scheduler.poll_sweep(Tick(100), |_| Tick(0)),
            Some(SweepStep::Act(EntityId(3)))
        );
    }

    #[test]
    fn halted_scheduler_refuses_turns() {
        let mut scheduler = ready_scheduler(&[1]);
        scheduler.halt(TurnPhase::GameOver);
        assert_eq!(
            scheduler.enter_controlled_turn(),
            Err(TurnError::Terminal(TurnPhase::GameOver))
        );
        assert_eq!(scheduler.poll_sweep(Tick(10_000), |_| Tick(0)), None);
    }
}
