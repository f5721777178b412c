//! Effect descriptors.
//!
//! Effects are the atomic actions of cards and enemy abilities. Each one
//! names a kind, a magnitude, and (where it can vary) which side of the
//! encounter it lands on. Catalogs supply them as immutable data; the
//! resolver gives them meaning.
//!
//! The kind set and the target selectors are closed enums, so a malformed
//! "unknown effect" or "unresolvable target" cannot be constructed - the
//! corrupted-catalog failure modes are caught at deserialization.

use serde::{Deserialize, Serialize};

use crate::core::StatusKind;

/// Which combatant an effect lands on, relative to its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The combatant playing the card or action.
    Source,
    /// The opposing combatant.
    Opponent,
}

/// An atomic combat effect.
///
/// `GainSand` and `Draw` have no target selector: sand always flows to the
/// effect's source, and drawing is only meaningful for the side with a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Deal damage; the target's block absorbs first.
    Damage { amount: u32, target: Target },

    /// Restore health, up to the target's maximum.
    Heal { amount: u32, target: Target },

    /// Grant block for the current turn.
    Block { amount: u32, target: Target },

    /// Grant sand to the source's hour-glass, capped at capacity.
    GainSand { amount: u32 },

    /// Signal the caller to draw cards; deck management is external.
    Draw { count: u32 },

    /// Attach a timed status for `turns` turns.
    ApplyStatus {
        kind: StatusKind,
        turns: u32,
        target: Target,
    },
}

impl Effect {
    /// Damage to the opponent (the common case).
    #[must_use]
    pub const fn damage(amount: u32) -> Self {
        Self::Damage {
            amount,
            target: Target::Opponent,
        }
    }

    /// Healing on the source.
    #[must_use]
    pub const fn heal(amount: u32) -> Self {
        Self::Heal {
            amount,
            target: Target::Source,
        }
    }

    /// Block on the source.
    #[must_use]
    pub const fn block(amount: u32) -> Self {
        Self::Block {
            amount,
            target: Target::Source,
        }
    }

    /// Sand for the source.
    #[must_use]
    pub const fn gain_sand(amount: u32) -> Self {
        Self::GainSand { amount }
    }

    /// A card-draw signal.
    #[must_use]
    pub const fn draw(count: u32) -> Self {
        Self::Draw { count }
    }

    /// A timed status on the opponent (curses, wraps).
    #[must_use]
    pub const fn afflict(kind: StatusKind, turns: u32) -> Self {
        Self::ApplyStatus {
            kind,
            turns,
            target: Target::Opponent,
        }
    }

    /// A timed status on the source (blessings, wards).
    #[must_use]
    pub const fn bless(kind: StatusKind, turns: u32) -> Self {
        Self::ApplyStatus {
            kind,
            turns,
            target: Target::Source,
        }
    }

    /// The effect's magnitude: damage/heal/block amount, sand grains,
    /// cards drawn, or status turns.
    #[must_use]
    pub const fn magnitude(&self) -> u32 {
        match *self {
            Effect::Damage { amount, .. }
            | Effect::Heal { amount, .. }
            | Effect::Block { amount, .. }
            | Effect::GainSand { amount } => amount,
            Effect::Draw { count } => count,
            Effect::ApplyStatus { turns, .. } => turns,
        }
    }

    /// Whether this effect deals damage. Used by the intent policy's
    /// aggression bias.
    #[must_use]
    pub const fn is_damage(&self) -> bool {
        matches!(self, Effect::Damage { .. })
    }

    /// Whether this effect grants block. Used by the intent policy's
    /// defensive bias.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Effect::Block { .. })
    }
}
