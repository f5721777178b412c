//! Core combat types: combatant identity and entity model, the Hour-Glass
//! resource clock, timed statuses, and deterministic RNG.
//!
//! These are the leaves of the engine's dependency graph; everything else
//! (effects, AI, the session state machine) is built on top of them.

pub mod clock;
pub mod combatant;
pub mod rng;
pub mod status;

pub use clock::HourGlass;
pub use combatant::{Combatant, CombatantId};
pub use rng::CombatRng;
pub use status::StatusKind;
