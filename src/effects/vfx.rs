//! Visual effect reporting.
//!
//! Every effect resolution pushes one descriptor onto the
//! [`VisualEffectQueue`]. The presentation layer drains the queue once per
//! frame and renders the results on its own schedule; combat state never
//! waits for animation.
//!
//! Descriptors carry the *actual* magnitude (damage after block, healing
//! after the clamp), and the queue preserves resolution order exactly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CombatantId, StatusKind};

/// What kind of occurrence a visual effect describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualEffectKind {
    Damage,
    Heal,
    Block,
    SandGain,
    Draw,
    Status(StatusKind),
}

/// One effect occurrence, ready for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEffect {
    /// What happened.
    pub kind: VisualEffectKind,
    /// Who it happened to.
    pub target: CombatantId,
    /// The actual magnitude (health lost, health gained, block added, ...).
    pub amount: u32,
    /// Combat-clock time of the resolution.
    pub timestamp: Duration,
}

/// Append-only buffer of visual effects, drained once per frame.
#[derive(Clone, Debug, Default)]
pub struct VisualEffectQueue {
    pending: Vec<VisualEffect>,
}

impl VisualEffectQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor.
    pub fn push(&mut self, effect: VisualEffect) {
        self.pending.push(effect);
    }

    /// Consume and clear the queue, returning descriptors in resolution order.
    pub fn drain(&mut self) -> Vec<VisualEffect> {
        std::mem::take(&mut self.pending)
    }

    /// Number of pending descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if there is nothing pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
