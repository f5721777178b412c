//! # duat-combat
//!
//! Turn-based combat engine with the Hour-Glass Initiative system for an
//! Egyptian-themed roguelike deck-builder.
//!
//! ## Design Principles
//!
//! 1. **Poll-driven, single-threaded**: The caller's game loop calls
//!    `update(delta)` once per frame; `play_card`/`end_player_turn` run
//!    synchronously on input. No background threads, timers, or yields.
//!
//! 2. **Catalogs In, Snapshots Out**: Cards and enemy actions arrive as
//!    immutable external data, validated at ingest. The engine exposes a
//!    state snapshot and a visual-effect stream; it renders nothing.
//!
//! 3. **Deterministic Under Test**: All randomness flows through a seedable
//!    injected RNG; the combat clock is caller-advanced. A fixed seed and a
//!    fixed frame script replay an encounter exactly.
//!
//! ## Architecture
//!
//! - **Hour-Glass**: Each combatant's sand pool regenerates one grain per
//!   real-time interval, frame-rate independent, with carry-forward
//!   remainder accounting.
//!
//! - **Closed-Variant Data**: Effect kinds, target selectors, statuses,
//!   phases, and events are closed enums; malformed catalog content fails
//!   at deserialization, not mid-combat.
//!
//! ## Modules
//!
//! - `core`: Combatants, the Hour-Glass clock, statuses, RNG
//! - `cards`: Card/enemy-action catalog types and the validating registry
//! - `effects`: Effect descriptors, the resolver, visual-effect queue
//! - `ai`: Health-aware weighted enemy intent selection
//! - `session`: Phases, observer events, snapshots, the combat session
//! - `content`: Stock starter cards and enemy tables

pub mod ai;
pub mod cards;
pub mod content;
pub mod core;
pub mod effects;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CombatRng, Combatant, CombatantId, HourGlass, StatusKind};

pub use crate::cards::{Card, CardId, CardRegistry, CatalogError, EnemyAction};

pub use crate::effects::{Effect, EffectResolver, Target, VisualEffect, VisualEffectKind};

pub use crate::ai::IntentPolicy;

pub use crate::session::{
    ActionError, CombatEvent, CombatOutcome, CombatPhase, CombatSession, CombatSnapshot,
    CombatantSnapshot, EncounterBuilder, EventKind, PlayOutcome, StatBlock, TurnPhase,
};
