//! Enemy action tables.

use crate::cards::EnemyAction;
use crate::core::StatusKind;
use crate::effects::Effect;

/// The Scarab Guardian: a straightforward brawler with one defensive tell.
#[must_use]
pub fn scarab_guardian() -> Vec<EnemyAction> {
    vec![
        EnemyAction::new(
            "Claw Strike",
            1,
            [Effect::damage(8)],
            0.6,
            "A quick claw attack dealing 8 damage.",
        ),
        EnemyAction::new(
            "Guard Stance",
            2,
            [Effect::block(12)],
            0.3,
            "Defensive stance, gaining 12 block.",
        ),
        EnemyAction::new(
            "Fury Swipe",
            3,
            [Effect::damage(15)],
            0.4,
            "A powerful attack dealing 15 damage.",
        ),
    ]
}

/// The Mummy Warden: lighter hits, curses, and self-mending.
#[must_use]
pub fn mummy_warden() -> Vec<EnemyAction> {
    vec![
        EnemyAction::new(
            "Bandage Lash",
            1,
            [Effect::damage(6)],
            0.5,
            "A whipping strike of burial wrappings dealing 6 damage.",
        ),
        EnemyAction::new(
            "Mummy Wrap",
            2,
            [Effect::afflict(StatusKind::MummyWrap, 2)],
            0.3,
            "Binding wraps entangle you for 2 turns.",
        ),
        EnemyAction::new(
            "Embalmer's Mend",
            2,
            [Effect::heal(8)],
            0.2,
            "Ancient unguents knit the warden's wounds for 8.",
        ),
    ]
}
