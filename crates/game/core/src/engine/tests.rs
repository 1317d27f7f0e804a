use std::sync::{Arc, Mutex};

use super::*;
use crate::config::TimingConfig;
use crate::env::ConsumableKind;
use crate::events::{AudioCue, MusicTrack};
use crate::generate::Placement;
use crate::state::{CardinalDirection, EquipmentId, EquipmentSlots, Intent, SlotKind};

const START: Tick = Tick(500);

fn at(x: i32, y: i32, kind: PlacementKind) -> Placement {
    Placement {
        position: Position::new(x, y),
        kind,
    }
}

fn plan(floor: u32, placements: Vec<Placement>) -> FloorPlan {
    let board = BoardDimensions::new(8, 8);
    FloorPlan {
        floor,
        board,
        layout: Vec::new(),
        placements,
        exit: board.exit(),
        music: MusicTrack::Regular,
    }
}

fn build(plan: FloorPlan, session: SessionState, config: GameConfig) -> FloorEngine {
    let mut engine = FloorEngine::new(
        plan,
        &session,
        Arc::new(config),
        Catalogs::reference(),
        EventBus::new(),
        Tick::ZERO,
    )
    .unwrap();
    assert_eq!(engine.advance(START), TurnPhase::ControlledTurn);
    engine
}

fn ready(placements: Vec<Placement>, session: SessionState) -> FloorEngine {
    build(plan(1, placements), session, GameConfig::default())
}

fn record(engine: &mut FloorEngine) -> Arc<Mutex<Vec<HudEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    engine.subscribe(Arc::new(move |event: &HudEvent| {
        sink.lock().unwrap().push(*event);
    }));
    events
}

fn go(direction: CardinalDirection) -> Intent {
    Intent::toward(direction)
}

/// Runs the open sweep to completion and returns the time control came back.
fn finish_sweep(engine: &mut FloorEngine, mut now: Tick) -> Tick {
    for _ in 0..100 {
        if engine.advance(now) != TurnPhase::AutonomousSweep {
            return now;
        }
        now += Tick(50);
    }
    panic!("sweep never finished");
}

/// Bumps the boundary so the turn passes without moving.
fn pass_turn(engine: &mut FloorEngine, now: Tick) -> Tick {
    engine.submit_intent(go(CardinalDirection::West), now).unwrap();
    finish_sweep(engine, now)
}

fn session(half_hearts: u32, lives: u32) -> SessionState {
    SessionState {
        half_hearts,
        lives,
        ..SessionState::default()
    }
}

#[test]
fn setup_blocks_intents_until_the_start_delay() {
    let mut engine = FloorEngine::new(
        plan(1, Vec::new()),
        &SessionState::default(),
        Arc::new(GameConfig::default()),
        Catalogs::reference(),
        EventBus::new(),
        Tick::ZERO,
    )
    .unwrap();

    assert_eq!(
        engine.submit_intent(go(CardinalDirection::East), Tick(100)),
        Err(IntentError::NotControlledTurn(TurnPhase::Setup))
    );
    assert_eq!(engine.advance(Tick(499)), TurnPhase::Setup);
    assert_eq!(engine.advance(START), TurnPhase::ControlledTurn);
    assert_eq!(
        engine.drain_signals(),
        vec![Signal::Music(MusicTrack::Regular)]
    );
}

#[test]
fn free_move_consumes_the_turn() {
    let mut engine = ready(Vec::new(), SessionState::default());

    let report = engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Moved {
            to: Position::new(1, 0)
        }
    );
    assert_eq!(report.phase, TurnPhase::AutonomousSweep);
    assert_eq!(engine.controlled().position, Position::new(1, 0));
    assert!(engine.controlled().motion.is_moving());
    assert_eq!(
        engine.submit_intent(go(CardinalDirection::East), START),
        Err(IntentError::NotControlledTurn(TurnPhase::AutonomousSweep))
    );
    assert!(
        engine
            .drain_signals()
            .contains(&Signal::Cue(AudioCue::Move))
    );
}

#[test]
fn diagonal_intent_resolves_horizontally() {
    let mut engine = ready(Vec::new(), SessionState::default());
    let report = engine.submit_intent(Intent::new(1, 1), START).unwrap();
    assert_eq!(report.direction, CardinalDirection::East);
}

#[test]
fn idle_intent_does_not_consume_the_turn() {
    let mut engine = ready(Vec::new(), SessionState::default());
    assert_eq!(
        engine.submit_intent(Intent::NONE, START),
        Err(IntentError::NoDirection)
    );
    assert_eq!(engine.phase(), TurnPhase::ControlledTurn);
}

#[test]
fn second_move_waits_for_the_first_to_settle() {
    let config = GameConfig {
        timing: TimingConfig {
            controlled_move_time: Tick(1000),
            ..TimingConfig::default()
        },
        ..GameConfig::default()
    };
    let mut engine = build(plan(1, Vec::new()), SessionState::default(), config);

    engine
        .submit_intent(go(CardinalDirection::North), START)
        .unwrap();
    let now = finish_sweep(&mut engine, START);
    assert!(now < START + Tick(1000));

    assert_eq!(
        engine.submit_intent(go(CardinalDirection::North), now),
        Err(IntentError::StillMoving)
    );
    assert_eq!(engine.phase(), TurnPhase::ControlledTurn);
    assert!(
        engine
            .submit_intent(go(CardinalDirection::North), START + Tick(1000))
            .is_ok()
    );
}

#[test]
fn empty_sweep_takes_two_turn_delays() {
    let mut engine = ready(Vec::new(), SessionState::default());
    engine
        .submit_intent(go(CardinalDirection::West), START)
        .unwrap();

    assert_eq!(engine.advance(START + Tick(199)), TurnPhase::AutonomousSweep);
    assert_eq!(engine.advance(START + Tick(200)), TurnPhase::ControlledTurn);
}

#[test]
fn boundary_bump_still_consumes_the_turn() {
    let mut engine = ready(Vec::new(), SessionState::default());
    let report = engine
        .submit_intent(go(CardinalDirection::South), START)
        .unwrap();
    assert_eq!(report.outcome, TurnOutcome::Bumped);
    assert_eq!(report.phase, TurnPhase::AutonomousSweep);
    assert_eq!(engine.controlled().position, Position::ORIGIN);
}

#[test]
fn walls_fall_after_their_hit_points_are_chopped_away() {
    let wall = at(1, 0, PlacementKind::Obstacle { hit_points: 3 });
    let mut engine = ready(vec![wall], SessionState::default());
    let mut now = START;

    for hit in 1..=3 {
        let report = engine
            .submit_intent(go(CardinalDirection::East), now)
            .unwrap();
        assert_eq!(
            report.outcome,
            TurnOutcome::Chopped {
                obstacle: EntityId(1),
                destroyed: hit == 3
            }
        );
        now = finish_sweep(&mut engine, now);
    }

    assert_eq!(engine.obstacles().count(), 0);
    assert_eq!(engine.controlled().position, Position::ORIGIN);
    let report = engine
        .submit_intent(go(CardinalDirection::East), now)
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Moved {
            to: Position::new(1, 0)
        }
    );
}

#[test]
fn weapon_swap_replaces_the_old_bonus() {
    let sword = at(1, 0, PlacementKind::Equipment(EquipmentId(8)));
    let mut engine = ready(vec![sword], SessionState::default());
    let events = record(&mut engine);

    let report = engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Equipped {
            slot: SlotKind::Weapon,
            item: EquipmentId(8),
            replaced: Some(EquipmentId(7)),
        }
    );

    // Dagger (+1) swapped for the sword (+2).
    assert_eq!(engine.controlled().stats.attack, 2);
    assert_eq!(engine.controlled().position, Position::ORIGIN);
    assert_eq!(engine.equipment_drops().count(), 0);
    assert_eq!(
        *events.lock().unwrap(),
        vec![HudEvent::Equipped {
            slot: SlotKind::Weapon,
            item: EquipmentId(8),
            replaced: Some(EquipmentId(7)),
        }]
    );
    assert!(engine.drain_signals().contains(&Signal::EquipmentReleased {
        item: EquipmentId(7)
    }));
}

#[test]
fn heart_pendant_grows_capacity() {
    let ruby = at(1, 0, PlacementKind::Equipment(EquipmentId(1)));
    let mut engine = ready(vec![ruby], SessionState::default());
    let events = record(&mut engine);

    engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();

    let hearts = &engine.controlled().hearts;
    assert_eq!(hearts.max_halves(), 8);
    assert_eq!(hearts.units(), &[2, 2, 2, 0]);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&HudEvent::MaxHeartsChanged { max_halves: 8 })
    );
}

#[test]
fn smaller_pendant_lowers_capacity_and_clamps_next_turn() {
    let wearing_ruby = SessionState {
        max_halves: 8,
        half_hearts: 8,
        slots: EquipmentSlots {
            pendant: Some(EquipmentId(1)),
            ..EquipmentSlots::with_weapon(EquipmentId(7))
        },
        ..SessionState::default()
    };
    let garnet = at(1, 0, PlacementKind::Equipment(EquipmentId(6)));
    let mut engine = ready(vec![garnet], wearing_ruby);
    let events = record(&mut engine);

    engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();
    assert_eq!(engine.controlled().hearts.max_halves(), 7);
    assert_eq!(engine.controlled().half_hearts(), 8);

    let now = finish_sweep(&mut engine, START);
    engine
        .submit_intent(go(CardinalDirection::North), now)
        .unwrap();

    assert_eq!(engine.controlled().half_hearts(), 7);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            HudEvent::Equipped {
                slot: SlotKind::Pendant,
                item: EquipmentId(6),
                replaced: Some(EquipmentId(1)),
            },
            HudEvent::MaxHeartsChanged { max_halves: 7 },
            HudEvent::Damaged {
                amount: 1,
                remaining: 7
            },
        ]
    );
}

#[test]
fn autonomous_entities_settle_before_their_first_move() {
    let ghoul = at(1, 0, PlacementKind::Enemy { template: 1 });
    let mut engine = ready(vec![ghoul], SessionState::default());
    let events = record(&mut engine);

    let now = pass_turn(&mut engine, START);
    assert!(events.lock().unwrap().is_empty());
    assert_eq!(engine.controlled().half_hearts(), 6);

    pass_turn(&mut engine, now);
    assert_eq!(engine.controlled().half_hearts(), 4);
    assert_eq!(
        *events.lock().unwrap(),
        vec![HudEvent::Damaged {
            amount: 2,
            remaining: 4
        }]
    );
}

#[test]
fn autonomous_entities_chase_the_controlled_entity() {
    let rat = at(4, 0, PlacementKind::Enemy { template: 0 });
    let mut engine = ready(vec![rat], SessionState::default());

    let now = pass_turn(&mut engine, START);
    assert_eq!(engine.autonomous()[0].position, Position::new(4, 0));
    pass_turn(&mut engine, now);
    assert_eq!(engine.autonomous()[0].position, Position::new(3, 0));
}

#[test]
fn losing_every_heart_with_no_lives_ends_the_run() {
    let warden = at(1, 0, PlacementKind::Boss { template: 100 });
    let mut engine = ready(vec![warden], session(5, 0));
    let events = record(&mut engine);
    assert_eq!(engine.controlled().hearts.units(), &[2, 2, 1]);

    let mut now = START;
    for _ in 0..2 {
        now = pass_turn(&mut engine, now);
    }
    assert_eq!(engine.controlled().hearts.units(), &[2, 0, 0]);
    assert_eq!(engine.phase(), TurnPhase::ControlledTurn);

    for _ in 0..2 {
        engine
            .submit_intent(go(CardinalDirection::West), now)
            .unwrap();
        now = finish_sweep(&mut engine, now);
    }

    assert_eq!(engine.controlled().hearts.units(), &[0, 0, 0]);
    assert_eq!(engine.phase(), TurnPhase::GameOver);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            HudEvent::Damaged {
                amount: 3,
                remaining: 2
            },
            HudEvent::Damaged {
                amount: 2,
                remaining: 0
            },
        ]
    );
    assert!(
        engine
            .drain_signals()
            .contains(&Signal::Cue(AudioCue::GameOver))
    );
    assert_eq!(
        engine.submit_intent(go(CardinalDirection::West), now + Tick(1000)),
        Err(IntentError::NotControlledTurn(TurnPhase::GameOver))
    );
}

#[test]
fn spare_life_refills_the_track() {
    let ghoul = at(1, 0, PlacementKind::Enemy { template: 1 });
    let mut engine = ready(vec![ghoul], session(2, 1));
    let events = record(&mut engine);

    let now = pass_turn(&mut engine, START);
    pass_turn(&mut engine, now);

    assert_eq!(engine.controlled().lives, 0);
    assert_eq!(engine.controlled().half_hearts(), 6);
    assert_eq!(engine.phase(), TurnPhase::ControlledTurn);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            HudEvent::Damaged {
                amount: 2,
                remaining: 0
            },
            HudEvent::Healed {
                amount: 6,
                total: 6
            },
        ]
    );
}

#[test]
fn striking_an_enemy_uses_flat_attack_and_removes_it_on_death() {
    let rat = at(1, 0, PlacementKind::Enemy { template: 0 });
    let mut engine = ready(vec![rat], SessionState::default());

    let report = engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Attacked {
            target: EntityId(1),
            damage: 1,
            killed: false
        }
    );
    let now = finish_sweep(&mut engine, START);

    let report = engine
        .submit_intent(go(CardinalDirection::East), now)
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Attacked {
            target: EntityId(1),
            damage: 1,
            killed: true
        }
    );
    assert!(engine.autonomous().is_empty());
    assert!(engine.scheduler().roster().is_empty());
    assert!(
        engine
            .drain_signals()
            .contains(&Signal::Death { entity: EntityId(1) })
    );
}

#[test]
fn consumables_heal_on_entry() {
    let cookies = at(1, 0, PlacementKind::Consumable(ConsumableKind::Cookies));
    let mut engine = ready(vec![cookies], session(1, 0));
    let events = record(&mut engine);

    engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();

    assert_eq!(engine.controlled().half_hearts(), 5);
    assert_eq!(engine.consumables().count(), 0);
    assert_eq!(
        *events.lock().unwrap(),
        vec![HudEvent::Healed {
            amount: 4,
            total: 5
        }]
    );
    assert!(engine.drain_signals().contains(&Signal::Cue(AudioCue::Eat)));
}

#[test]
fn life_potion_grants_a_spare_life() {
    let potion = at(1, 0, PlacementKind::Consumable(ConsumableKind::LifePotion));
    let mut engine = ready(vec![potion], session(6, 0));

    engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();
    assert_eq!(engine.controlled().lives, 1);
}

#[test]
fn exit_completes_regular_floors_and_wins_the_boss_floor() {
    for (floor, expected) in [(1, TurnPhase::FloorComplete), (4, TurnPhase::Won)] {
        let mut floor_plan = plan(floor, Vec::new());
        floor_plan.exit = Position::new(1, 0);
        let mut engine = build(floor_plan, SessionState::default(), GameConfig::default());

        let report = engine
            .submit_intent(go(CardinalDirection::East), START)
            .unwrap();
        assert_eq!(report.phase, expected);
        assert_eq!(engine.advance(START + Tick(10_000)), expected);
    }
}

#[test]
fn session_round_trips_through_a_floor() {
    let sword = at(1, 0, PlacementKind::Equipment(EquipmentId(8)));
    let mut engine = ready(vec![sword], session(3, 2));
    engine
        .submit_intent(go(CardinalDirection::East), START)
        .unwrap();

    let saved = engine.session();
    assert_eq!(saved.attack, 2);
    assert_eq!(saved.half_hearts, 3);
    assert_eq!(saved.lives, 2);
    assert_eq!(saved.slots.weapon, Some(EquipmentId(8)));
}

#[test]
fn campaign_advances_only_after_a_completed_floor() {
    let mut campaign = Campaign::new(GameConfig::default(), Catalogs::reference(), 17).unwrap();
    let session = campaign.initial_session();

    let engine = campaign
        .start_floor(&session, EventBus::new(), Tick::ZERO)
        .unwrap();
    assert_eq!(engine.floor(), 1);
    assert_eq!(campaign.pool().len(), 8);

    let (returned, _) = campaign.finish_floor(engine);
    assert_eq!(returned, session);
    assert_eq!(campaign.floor(), 1);
}
