//! Stock content: the starter card set and enemy action tables.
//!
//! The engine consumes whatever catalogs the content pipeline supplies;
//! this module is a hand-written baseline so the crate is playable out of
//! the box and tests have realistic fixtures. Cards are balanced around
//! the 6-sand hour-glass, with meaningful choices at every cost level.

mod cards;
mod enemies;

pub use cards::{starter_cards, starter_hand};
pub use enemies::{mummy_warden, scarab_guardian};
