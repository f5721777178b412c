//! The combat session: phases, observer events, snapshots, and the
//! top-level state machine.
//!
//! ## Key Types
//!
//! - `CombatPhase` / `TurnPhase`: the tagged-union phase model
//! - `EventKind` / `CombatEvent` / `EventBus`: the observer surface
//! - `CombatSnapshot`: per-frame read-only state for the presentation layer
//! - `EncounterBuilder` / `CombatSession`: construction and orchestration
//!
//! The session owns both combatants exclusively for its lifetime; no other
//! component holds a mutable reference.

mod events;
mod manager;
mod phase;
mod snapshot;

pub use events::{CombatEvent, EventBus, EventHandler, EventKind};
pub use manager::{ActionError, CombatSession, EncounterBuilder, PlayOutcome, StatBlock};
pub use phase::{CombatOutcome, CombatPhase, TurnPhase};
pub use snapshot::{CombatSnapshot, CombatantSnapshot};
