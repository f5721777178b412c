//! Combat phases.
//!
//! The phase is a tagged union: the turn sub-phase rides inside the
//! `PlayerTurn`/`EnemyTurn` variants, so states like "victory, sub-phase
//! main" cannot be expressed at all. Transition validity is enforced by the
//! session; this module only defines the shape and the queries the rest of
//! the engine asks of it.

use serde::{Deserialize, Serialize};

/// Sub-phase within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    Start,
    Main,
    End,
}

/// Top-level combat phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    /// Session constructed, encounter not yet begun.
    Setup,
    /// The player acts.
    PlayerTurn(TurnPhase),
    /// The enemy acts.
    EnemyTurn(TurnPhase),
    /// Terminal: the enemy fell.
    Victory,
    /// Terminal: the player fell.
    Defeat,
}

/// How a finished encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

impl CombatPhase {
    /// Whether this phase ends the session. Terminal phases accept no
    /// further mutation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }

    /// Whether the player may act (play cards, end the turn).
    #[must_use]
    pub const fn is_player_main(&self) -> bool {
        matches!(self, CombatPhase::PlayerTurn(TurnPhase::Main))
    }

    /// The terminal outcome, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<CombatOutcome> {
        match self {
            CombatPhase::Victory => Some(CombatOutcome::Victory),
            CombatPhase::Defeat => Some(CombatOutcome::Defeat),
            _ => None,
        }
    }
}

impl std::fmt::Display for CombatPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatPhase::Setup => write!(f, "setup"),
            CombatPhase::PlayerTurn(sub) => write!(f, "player_turn/{sub}"),
            CombatPhase::EnemyTurn(sub) => write!(f, "enemy_turn/{sub}"),
            CombatPhase::Victory => write!(f, "victory"),
            CombatPhase::Defeat => write!(f, "defeat"),
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Start => "start",
            TurnPhase::Main => "main",
            TurnPhase::End => "end",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(CombatPhase::Victory.is_terminal());
        assert!(CombatPhase::Defeat.is_terminal());
        assert!(!CombatPhase::Setup.is_terminal());
        assert!(!CombatPhase::PlayerTurn(TurnPhase::Main).is_terminal());
        assert!(!CombatPhase::EnemyTurn(TurnPhase::End).is_terminal());
    }

    #[test]
    fn test_player_main_gate() {
        assert!(CombatPhase::PlayerTurn(TurnPhase::Main).is_player_main());
        assert!(!CombatPhase::PlayerTurn(TurnPhase::Start).is_player_main());
        assert!(!CombatPhase::EnemyTurn(TurnPhase::Main).is_player_main());
    }

    #[test]
    fn test_outcome() {
        assert_eq!(CombatPhase::Victory.outcome(), Some(CombatOutcome::Victory));
        assert_eq!(CombatPhase::Defeat.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(CombatPhase::Setup.outcome(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", CombatPhase::PlayerTurn(TurnPhase::Main)),
            "player_turn/main"
        );
        assert_eq!(format!("{}", CombatPhase::Victory), "victory");
    }
}
