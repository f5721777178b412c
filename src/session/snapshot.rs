//! Read-only state exposure for the presentation layer.
//!
//! A [`CombatSnapshot`] is everything the UI needs to draw a frame: phase,
//! turn number, both combatants' vitals and sand, the enemy's telegraphed
//! intent, and the player's hand size. Snapshots are plain serde data with
//! no references back into the session, so the renderer can hold them
//! across frames freely.

use serde::{Deserialize, Serialize};

use crate::core::{Combatant, CombatantId};

use super::phase::CombatPhase;

/// One combatant's externally visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: CombatantId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub sand: u32,
    pub sand_capacity: u32,
    pub block: u32,
}

impl CombatantSnapshot {
    /// Capture a combatant's current state.
    #[must_use]
    pub fn of(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id(),
            name: combatant.name().to_string(),
            health: combatant.health(),
            max_health: combatant.max_health(),
            sand: combatant.hourglass().current(),
            sand_capacity: combatant.hourglass().capacity(),
            block: combatant.block(),
        }
    }
}

/// The full per-frame state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    /// Current phase, sub-phase included for turn phases.
    pub phase: CombatPhase,
    /// Turn counter, starting at 1.
    pub turn: u32,
    pub player: CombatantSnapshot,
    pub enemy: CombatantSnapshot,
    /// The enemy's telegraphed next action, if one is affordable.
    pub enemy_intent: Option<String>,
    /// Cards currently in the player's hand.
    pub hand_size: usize,
}
