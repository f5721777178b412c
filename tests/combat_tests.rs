//! Combat session integration tests.
//!
//! Full encounter flows: setup, card plays, the inline enemy turn, frame
//! updates, and the terminal transitions.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use duat_combat::cards::{Card, CardId, CardRegistry};
use duat_combat::core::CombatRng;
use duat_combat::effects::{Effect, VisualEffectKind};
use duat_combat::session::{
    ActionError, CombatEvent, CombatOutcome, CombatPhase, CombatSession, EncounterBuilder,
    EventKind, StatBlock, TurnPhase,
};

const KHOPESH_STRIKE: CardId = CardId::new(100);
const SOLAR_LANCE: CardId = CardId::new(101);
const SANDSTORM_VEIL: CardId = CardId::new(102);

fn test_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry
        .register_all([
            Card::new(KHOPESH_STRIKE, "Khopesh Strike", 3, [Effect::damage(8)]),
            Card::new(SOLAR_LANCE, "Solar Lance", 2, [Effect::damage(25)]),
            Card::new(SANDSTORM_VEIL, "Sandstorm Veil", 1, [Effect::block(8)]),
        ])
        .unwrap();
    registry
}

fn scarab_session(seed: u64) -> CombatSession {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("duat_combat=debug")
        .with_test_writer()
        .try_init();

    EncounterBuilder::new(
        StatBlock::new("Player", 50, 50),
        StatBlock::new("Scarab", 20, 20),
    )
    .cards(test_registry())
    .hand(vec![KHOPESH_STRIKE, SOLAR_LANCE, SANDSTORM_VEIL])
    .enemy_actions(duat_combat::content::scarab_guardian())
    .rng(CombatRng::new(seed))
    .build()
    .unwrap()
}

#[test]
fn setup_enters_player_main_with_default_sand() {
    let mut session = scarab_session(42);
    assert_eq!(session.phase(), CombatPhase::Setup);

    session.start().unwrap();

    assert_eq!(session.phase(), CombatPhase::PlayerTurn(TurnPhase::Main));
    assert_eq!(session.turn(), 1);
    assert_eq!(session.player().hourglass().current(), 3);
    assert_eq!(session.enemy().hourglass().current(), 2);

    // Starting is a one-shot transition
    assert!(matches!(
        session.start(),
        Err(ActionError::OutOfPhase { .. })
    ));
}

/// 50/50 vs Scarab 20/20, sand 3/6; a 3-cost card dealing 8 lands at
/// 12/20 with the pool emptied and exactly one card_played.
#[test]
fn play_card_spends_sand_and_resolves_effects() {
    let mut session = scarab_session(42);
    let plays = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&plays);
    session.subscribe(EventKind::CardPlayed, move |_| {
        *sink.borrow_mut() += 1;
    });
    session.start().unwrap();

    let outcome = session.play_card(KHOPESH_STRIKE).unwrap();

    assert_eq!(outcome.cards_to_draw, 0);
    assert_eq!(session.enemy().health(), 12);
    assert_eq!(session.player().hourglass().current(), 0);
    assert_eq!(session.hand(), &[SOLAR_LANCE, SANDSTORM_VEIL]);
    assert_eq!(session.discard(), &[KHOPESH_STRIKE]);
    assert_eq!(*plays.borrow(), 1);

    let vfx = session.drain_visual_effects();
    assert_eq!(vfx.len(), 1);
    assert_eq!(vfx[0].kind, VisualEffectKind::Damage);
    assert_eq!(vfx[0].amount, 8);
}

#[test]
fn unaffordable_card_is_rejected_without_mutation() {
    let mut session = scarab_session(42);
    let plays = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&plays);
    session.subscribe(EventKind::CardPlayed, move |_| {
        *sink.borrow_mut() += 1;
    });
    session.start().unwrap();

    // 3 sand: Khopesh Strike empties the pool
    session.play_card(KHOPESH_STRIKE).unwrap();

    let err = session.play_card(SOLAR_LANCE).unwrap_err();
    assert_eq!(
        err,
        ActionError::NotEnoughSand {
            needed: 2,
            available: 0
        }
    );

    // No state moved, no event fired for the rejection
    assert_eq!(session.enemy().health(), 12);
    assert_eq!(session.hand(), &[SOLAR_LANCE, SANDSTORM_VEIL]);
    assert_eq!(*plays.borrow(), 1);
}

#[test]
fn card_not_in_hand_is_rejected() {
    let mut session = scarab_session(42);
    session.start().unwrap();

    session.play_card(SANDSTORM_VEIL).unwrap();
    let err = session.play_card(SANDSTORM_VEIL).unwrap_err();
    assert_eq!(err, ActionError::CardNotInHand(SANDSTORM_VEIL));
}

#[test]
fn cards_are_rejected_outside_player_main() {
    let mut session = scarab_session(42);
    let err = session.play_card(KHOPESH_STRIKE).unwrap_err();
    assert!(matches!(err, ActionError::OutOfPhase { .. }));
}

#[test]
fn end_player_turn_runs_enemy_turn_and_returns() {
    let mut session = scarab_session(42);
    session.start().unwrap();

    let log: Rc<RefCell<Vec<String>>> = Rc::default();
    for kind in [
        EventKind::PlayerTurnEnded,
        EventKind::EnemyTurnStarted,
        EventKind::EnemyActionExecuted,
        EventKind::EnemyTurnEnded,
        EventKind::PlayerTurnStarted,
    ] {
        let sink = Rc::clone(&log);
        session.subscribe(kind, move |event| {
            sink.borrow_mut().push(format!("{}", event.kind()));
        });
    }

    session.end_player_turn().unwrap();

    // Back in the player's main phase, one turn later
    assert_eq!(session.phase(), CombatPhase::PlayerTurn(TurnPhase::Main));
    assert_eq!(session.turn(), 2);

    // With 2 sand the Scarab affords Claw Strike (1) or Guard Stance (2),
    // so some action resolved and its cost was spent
    let events = log.borrow();
    assert_eq!(events[0], "player_turn_ended");
    assert_eq!(events[1], "enemy_turn_started");
    assert_eq!(events[2], "enemy_action_executed");
    assert_eq!(events[3], "enemy_turn_ended");
    assert_eq!(events[4], "player_turn_started");

    let hurt_player = session.player().health() < 50 || session.player().block() == 0;
    assert!(hurt_player);
    assert!(session.enemy().hourglass().current() < 2);
}

#[test]
fn enemy_with_no_affordable_action_passes() {
    let mut session = EncounterBuilder::new(
        StatBlock::new("Player", 50, 50),
        StatBlock::new("Scarab", 20, 20),
    )
    .cards(test_registry())
    .hand(vec![KHOPESH_STRIKE])
    .enemy_actions(duat_combat::content::scarab_guardian())
    .rng(CombatRng::new(42))
    .enemy_sand(0)
    .build()
    .unwrap();

    let executed = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&executed);
    session.subscribe(EventKind::EnemyActionExecuted, move |_| {
        *sink.borrow_mut() += 1;
    });
    session.start().unwrap();

    session.end_player_turn().unwrap();

    // Harmless pass: no action, no damage, turn still advanced
    assert_eq!(*executed.borrow(), 0);
    assert_eq!(session.player().health(), 50);
    assert_eq!(session.turn(), 2);
    assert_eq!(session.snapshot().enemy_intent, None);
}

#[test]
fn update_accrues_both_hourglasses() {
    let mut session = scarab_session(42);
    session.start().unwrap();

    // Sixty 16ms frames plus one 40ms frame: 1000ms exactly
    for _ in 0..60 {
        session.update(Duration::from_millis(16));
    }
    session.update(Duration::from_millis(40));

    assert_eq!(session.clock(), Duration::from_secs(1));
    assert_eq!(session.player().hourglass().current(), 4);
    assert_eq!(session.enemy().hourglass().current(), 3);
}

#[test]
fn victory_fires_terminal_event_once() {
    let mut session = scarab_session(42);
    let endings: Rc<RefCell<Vec<CombatOutcome>>> = Rc::default();
    let sink = Rc::clone(&endings);
    session.subscribe(EventKind::CombatEnded, move |event| {
        if let CombatEvent::CombatEnded { outcome, .. } = event {
            sink.borrow_mut().push(*outcome);
        }
    });
    session.start().unwrap();

    // 25 damage fells the 20-health Scarab
    session.play_card(SOLAR_LANCE).unwrap();

    assert_eq!(session.phase(), CombatPhase::Victory);
    assert_eq!(*endings.borrow(), vec![CombatOutcome::Victory]);

    // Terminal is sticky: further operations reject without re-firing
    assert_eq!(session.play_card(KHOPESH_STRIKE), Err(ActionError::CombatOver));
    assert_eq!(session.end_player_turn(), Err(ActionError::CombatOver));
    assert_eq!(session.concede(), Err(ActionError::CombatOver));
    session.update(Duration::from_secs(5));

    assert_eq!(session.phase(), CombatPhase::Victory);
    assert_eq!(endings.borrow().len(), 1);
}

#[test]
fn update_in_terminal_phase_is_inert() {
    let mut session = scarab_session(42);
    session.start().unwrap();
    session.play_card(SOLAR_LANCE).unwrap();
    assert_eq!(session.phase(), CombatPhase::Victory);

    let sand_before = session.player().hourglass().current();
    session.update(Duration::from_secs(10));
    assert_eq!(session.player().hourglass().current(), sand_before);
    assert_eq!(session.clock(), Duration::ZERO);
}

#[test]
fn concede_forces_defeat() {
    let mut session = scarab_session(42);
    let endings = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&endings);
    session.subscribe(EventKind::CombatEnded, move |event| {
        if let CombatEvent::CombatEnded { outcome, turns, .. } = event {
            sink.borrow_mut().push((*outcome, *turns));
        }
    });
    session.start().unwrap();

    session.concede().unwrap();

    assert_eq!(session.phase(), CombatPhase::Defeat);
    assert_eq!(*endings.borrow(), vec![(CombatOutcome::Defeat, 1)]);
}

/// Documented tie-break: if a single check sees both sides at zero, the
/// result is defeat.
#[test]
fn mutual_death_resolves_as_defeat() {
    let mut registry = CardRegistry::new();
    let reckoning = CardId::new(200);
    registry
        .register(Card::new(
            reckoning,
            "Final Reckoning",
            0,
            // Order within the card does not matter; the end check runs
            // after the whole card resolves
            [Effect::damage(50), Effect::Damage { amount: 50, target: duat_combat::effects::Target::Source }],
        ))
        .unwrap();

    let mut session = EncounterBuilder::new(
        StatBlock::new("Player", 50, 50),
        StatBlock::new("Scarab", 20, 20),
    )
    .cards(registry)
    .hand(vec![reckoning])
    .enemy_actions(duat_combat::content::scarab_guardian())
    .rng(CombatRng::new(42))
    .build()
    .unwrap();
    session.start().unwrap();

    session.play_card(reckoning).unwrap();

    assert_eq!(session.phase(), CombatPhase::Defeat);
}

#[test]
fn snapshot_reflects_live_state() {
    let mut session = scarab_session(42);
    session.start().unwrap();
    session.play_card(KHOPESH_STRIKE).unwrap();

    let snap = session.snapshot();

    assert_eq!(snap.phase, CombatPhase::PlayerTurn(TurnPhase::Main));
    assert_eq!(snap.turn, 1);
    assert_eq!(snap.player.health, 50);
    assert_eq!(snap.player.sand, 0);
    assert_eq!(snap.enemy.name, "Scarab");
    assert_eq!(snap.enemy.health, 12);
    assert_eq!(snap.enemy_intent, None);
    assert_eq!(snap.hand_size, 2);

    session.end_player_turn().unwrap();
    let snap = session.snapshot();
    assert!(snap.enemy_intent.is_some(), "enemy telegraphs after its turn starts");
}

#[test]
fn visual_effects_preserve_resolution_order_across_turn() {
    let mut session = scarab_session(7);
    session.start().unwrap();

    session.play_card(SANDSTORM_VEIL).unwrap();
    session.play_card(SOLAR_LANCE).unwrap(); // ends combat at 25 damage

    let vfx = session.drain_visual_effects();
    assert_eq!(vfx.len(), 2);
    assert_eq!(vfx[0].kind, VisualEffectKind::Block);
    assert_eq!(vfx[1].kind, VisualEffectKind::Damage);
    assert!(session.drain_visual_effects().is_empty());
}

/// Fixed seed and fixed inputs replay the identical encounter.
#[test]
fn sessions_replay_deterministically() {
    let run = |seed: u64| {
        let mut session = scarab_session(seed);
        session.start().unwrap();
        for _ in 0..5 {
            if session.phase().is_terminal() {
                break;
            }
            session.update(Duration::from_secs(2));
            if let Some(id) = session.hand().first().copied() {
                let _ = session.play_card(id);
            }
            let _ = session.end_player_turn();
        }
        (
            session.snapshot(),
            session
                .drain_visual_effects()
                .into_iter()
                .map(|v| (v.kind, v.amount))
                .collect::<Vec<_>>(),
        )
    };

    assert_eq!(run(1234), run(1234));
}
