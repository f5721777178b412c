//! Enemy AI: the health-aware weighted intent selector.

mod intent;

pub use intent::{affordable_actions, select_intent, IntentPolicy};
