//! Drives whole runs through the runtime and checks the published events.

use std::path::PathBuf;
use std::sync::Arc;

use game_content::ContentFactory;
use game_core::{
    ActionOutcome, ClassKey, CombatEvent, DungeonGrid, EntityId, ErrorSeverity, ExecuteError,
    ExplorationOutcome, GamePhase, LayoutMaps, SessionOutcome, Step, Tile, Turn, Verdict,
};
use runtime::{Event, OracleManager, PartyEvent, Runtime, RuntimeConfig, RuntimeError, Topic};
use tokio::sync::broadcast::Receiver;

fn layout(rows: &[&str]) -> LayoutMaps {
    LayoutMaps::single(DungeonGrid::from_rows(rows).unwrap())
}

fn runtime_with(rows: &[&str], seed: u64) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            seed: Some(seed),
            ..RuntimeConfig::default()
        })
        .oracles(OracleManager::classic(layout(rows)))
        .build()
        .unwrap()
}

fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Recruits two fighters, embarks and walks east into the encounter.
fn enter_encounter(runtime: &mut Runtime) -> Vec<EntityId> {
    let party = vec![
        runtime.recruit("Aria", ClassKey::Fighter).unwrap(),
        runtime.recruit("Bram", ClassKey::Fighter).unwrap(),
    ];
    runtime.embark().unwrap();
    runtime.turn(Turn::Right).unwrap();
    let outcome = runtime.step(Step::Forward).unwrap();
    assert!(matches!(outcome, ExplorationOutcome::EncounterStarted { .. }));
    party
}

/// Attacks with the first living member until the session concludes.
fn fight_to_conclusion(runtime: &mut Runtime) -> SessionOutcome {
    for _ in 0..200 {
        if let Some(outcome) = runtime.conclude_if_session_over().unwrap() {
            return outcome;
        }
        let attacker = runtime.alive_party()[0].id;
        let target = runtime.alive_monsters()[0].id;
        let outcome = runtime.attack(attacker, target).unwrap();
        assert!(outcome.is_resolved());
    }
    panic!("combat did not conclude");
}

#[test]
fn build_requires_oracles() {
    let result = Runtime::builder().build();
    assert!(matches!(result, Err(RuntimeError::MissingOracles)));
}

#[test]
fn build_rejects_empty_event_buffer() {
    let result = Runtime::builder()
        .config(RuntimeConfig {
            seed: Some(1),
            event_buffer_size: 0,
        })
        .oracles(OracleManager::classic(layout(&["."])))
        .build();
    assert!(matches!(result, Err(RuntimeError::InvalidEventBuffer)));
}

#[test]
fn configured_seed_is_used() {
    let runtime = runtime_with(&["."], 42);
    assert_eq!(runtime.seed(), 42);
    assert_eq!(runtime.snapshot().phase, GamePhase::PartyCreation);
}

#[test]
fn party_lifecycle_is_published() {
    let mut runtime = runtime_with(&["."], 3);
    let mut party_rx = runtime.subscribe(Topic::Party);

    let id = runtime.recruit("  Aria ", ClassKey::Priest).unwrap();
    runtime.embark().unwrap();
    runtime.rest().unwrap();
    runtime.reset();

    let events = drain(&mut party_rx);
    assert_eq!(events.len(), 4);
    assert!(matches!(
        &events[0],
        Event::Party(PartyEvent::Recruited { id: recruited, name, class: ClassKey::Priest })
            if *recruited == id && name == "Aria"
    ));
    assert!(matches!(events[1], Event::Party(PartyEvent::Embarked { depth: 1 })));
    assert!(matches!(events[2], Event::Party(PartyEvent::Rested { .. })));
    assert!(matches!(events[3], Event::Party(PartyEvent::Reset)));
    assert!(runtime.state().party.is_empty());
}

#[test]
fn engine_errors_surface_with_severity() {
    let mut runtime = runtime_with(&["."], 3);
    let error = runtime.embark().unwrap_err();
    assert!(matches!(error, RuntimeError::Execute(ExecuteError::EmptyParty)));
    assert_eq!(error.severity(), ErrorSeverity::Validation);

    let error = runtime.recruit("   ", ClassKey::Mage).unwrap_err();
    assert!(matches!(error, RuntimeError::Execute(ExecuteError::EmptyName)));
    assert_eq!(RuntimeError::MissingOracles.severity(), ErrorSeverity::Fatal);
}

#[test]
fn declined_attack_changes_nothing() {
    let mut runtime = runtime_with(&[".E"], 11);
    let party = enter_encounter(&mut runtime);
    let mut combat_rx = runtime.subscribe(Topic::Combat);

    let before = runtime.snapshot();
    let outcome = runtime.attack(party[0], EntityId(999)).unwrap();

    assert!(matches!(outcome, ActionOutcome::Declined(_)));
    assert_eq!(runtime.snapshot(), before);
    let events = drain(&mut combat_rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::ActionDeclined(_)));
}

#[test]
fn selection_flow_executes_the_chosen_attack() {
    let mut runtime = runtime_with(&[".E"], 5);
    let party = enter_encounter(&mut runtime);
    let target = runtime.alive_monsters()[0].id;

    runtime.select_member(party[1]).unwrap();
    runtime.choose_attack().unwrap();
    let outcome = runtime.choose_target(target).unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.action.actor(), party[1]);
    assert_eq!(report.action.target(), target);
}

#[test]
fn combat_runs_to_a_conclusion() {
    let mut runtime = runtime_with(&[".E"], 2024);
    enter_encounter(&mut runtime);
    let mut combat_rx = runtime.subscribe(Topic::Combat);

    let outcome = fight_to_conclusion(&mut runtime);
    let snapshot = runtime.snapshot();
    assert!(snapshot.combat.is_none());

    match outcome.verdict() {
        Verdict::Victory => {
            assert_eq!(snapshot.phase, GamePhase::Exploring);
            let dungeon = snapshot.dungeon.as_ref().unwrap();
            assert_eq!(dungeon.current_tile(), Some(Tile::Floor));
        }
        Verdict::Defeat => assert_eq!(snapshot.phase, GamePhase::GameOver),
    }

    let events = drain(&mut combat_rx);
    assert!(matches!(
        events.first(),
        Some(Event::Combat(CombatEvent::PhaseEntered { .. }))
    ));
    assert!(matches!(
        events.last(),
        Some(Event::SessionConcluded(summary)) if summary.verdict == outcome.verdict()
    ));
}

#[test]
fn events_serialize_with_tagged_payloads() {
    let mut runtime = runtime_with(&[".E"], 13);
    let mut exploration_rx = runtime.subscribe(Topic::Exploration);
    enter_encounter(&mut runtime);

    let events = drain(&mut exploration_rx);
    let json = serde_json::to_value(events.last().unwrap()).unwrap();
    assert_eq!(json["Exploration"]["kind"], "encounter_started");
    assert!(json["Exploration"]["monsters"].as_array().is_some_and(|m| !m.is_empty()));
}

#[test]
fn same_seed_replays_the_same_run() {
    let play = || {
        let mut runtime = runtime_with(&[".E"], 77);
        enter_encounter(&mut runtime);
        let outcome = fight_to_conclusion(&mut runtime);
        (outcome, runtime.snapshot())
    };

    assert_eq!(play(), play());
}

#[test]
fn shipped_content_drives_a_run() {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let factory = ContentFactory::new(data);
    let oracles = OracleManager::new(
        Arc::new(factory.load_tables().unwrap()),
        Arc::new(factory.load_maps().unwrap()),
        Arc::new(factory.load_config().unwrap()),
    );
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: Some(9),
            ..RuntimeConfig::default()
        })
        .oracles(oracles)
        .build()
        .unwrap();

    runtime.recruit("Aria", ClassKey::Fighter).unwrap();
    runtime.embark().unwrap();

    let mut exploration_rx = runtime.subscribe(Topic::Exploration);
    runtime.turn(Turn::Left).unwrap();
    assert_eq!(drain(&mut exploration_rx).len(), 1);
    assert_eq!(runtime.state().phase, GamePhase::Exploring);
}
