//! The starter card set.

use crate::cards::{Card, CardId};
use crate::core::StatusKind;
use crate::effects::Effect;

/// The full starter catalog, ids 1..=15.
#[must_use]
pub fn starter_cards() -> Vec<Card> {
    vec![
        // === 0-cost: free actions ===
        Card::new(
            CardId::new(1),
            "Desert Whisper",
            0,
            [Effect::draw(1)],
        ),
        Card::new(
            CardId::new(2),
            "Sand Grain",
            0,
            [Effect::gain_sand(1)],
        ),
        // === 1-cost: basic actions ===
        Card::new(
            CardId::new(3),
            "Tomb Strike",
            1,
            [Effect::damage(6)],
        ),
        Card::new(
            CardId::new(4),
            "Ankh Blessing",
            1,
            [Effect::heal(5)],
        ),
        Card::new(
            CardId::new(5),
            "Scarab Ward",
            1,
            [Effect::block(5)],
        ),
        // === 2-cost: efficient actions ===
        Card::new(
            CardId::new(6),
            "Scarab Swarm",
            2,
            [Effect::damage(9)],
        ),
        Card::new(
            CardId::new(7),
            "Papyrus Scroll",
            2,
            [Effect::draw(2)],
        ),
        Card::new(
            CardId::new(8),
            "Curse of the Mummy",
            2,
            [Effect::afflict(StatusKind::MummyWrap, 2)],
        ),
        // === 3-cost: powerful actions ===
        Card::new(
            CardId::new(9),
            "Mummy's Wrath",
            3,
            [Effect::damage(14)],
        ),
        Card::new(
            CardId::new(10),
            "Isis's Grace",
            3,
            [Effect::heal(8), Effect::draw(1)],
        ),
        Card::new(
            CardId::new(11),
            "Blessing of Ra",
            3,
            [Effect::heal(6), Effect::bless(StatusKind::DivineProtection, 2)],
        ),
        // === 4-cost: major actions ===
        Card::new(
            CardId::new(12),
            "Pyramid Power",
            4,
            [Effect::damage(18)],
        ),
        Card::new(
            CardId::new(13),
            "Thoth's Wisdom",
            4,
            [Effect::draw(3), Effect::gain_sand(2)],
        ),
        // === 5-cost: epic actions ===
        Card::new(
            CardId::new(14),
            "Anubis Judgment",
            5,
            [Effect::damage(25)],
        ),
        // === 6-cost: ultimate actions ===
        Card::new(
            CardId::new(15),
            "Ra's Solar Flare",
            6,
            [Effect::damage(30)],
        ),
    ]
}

/// A sensible five-card opening hand from the starter set.
#[must_use]
pub fn starter_hand() -> Vec<CardId> {
    vec![
        CardId::new(3),  // Tomb Strike
        CardId::new(4),  // Ankh Blessing
        CardId::new(5),  // Scarab Ward
        CardId::new(6),  // Scarab Swarm
        CardId::new(9),  // Mummy's Wrath
    ]
}
