//! Timed combat statuses.
//!
//! Statuses are duration counters attached to a combatant: applied with a
//! turn count, decremented by one at the start of that combatant's turn,
//! removed at zero. The engine does the bookkeeping; what a status *means*
//! (damage scaling, targeting rules, cosmetics) is the presentation and
//! content layer's business.
//!
//! The kind set is a closed enumeration rather than free-form string keys,
//! so a typo in content is a compile or deserialization error instead of a
//! silently inert status.

use serde::{Deserialize, Serialize};

/// The closed set of timed status kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Divine favor shields the bearer from hostile effects.
    DivineProtection,
    /// Binding wraps that gradually hamper the bearer.
    MummyWrap,
    /// The bearer's wounds knit over time.
    Regenerate,
    /// The bearer cannot be singled out.
    Stealth,
}

impl StatusKind {
    /// Every status kind, for exhaustive iteration in tooling and tests.
    pub const ALL: [StatusKind; 4] = [
        StatusKind::DivineProtection,
        StatusKind::MummyWrap,
        StatusKind::Regenerate,
        StatusKind::Stealth,
    ];
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusKind::DivineProtection => "divine_protection",
            StatusKind::MummyWrap => "mummy_wrap",
            StatusKind::Regenerate => "regenerate",
            StatusKind::Stealth => "stealth",
        };
        write!(f, "{name}")
    }
}
