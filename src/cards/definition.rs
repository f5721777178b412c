//! Card definitions - static, externally supplied card data.
//!
//! A [`Card`] is an immutable catalog entry: a sand cost and an ordered
//! effect list. The content/asset layer produces these (typically as JSON);
//! the engine only consumes them. Instance concerns like "which zone is
//! this card in" do not exist here - the session tracks hand and discard
//! membership by id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// Identifies the card *type* ("Tomb Strike"), not a physical copy; the
/// session's hand and discard hold these ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Ordered effect list; nearly every card has four or fewer effects.
pub type EffectList = SmallVec<[Effect; 4]>;

/// A playable card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Sand cost to play.
    pub cost: u32,

    /// Effects, resolved in declaration order.
    pub effects: EffectList,
}

impl Card {
    /// Create a card.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        effects: impl IntoIterator<Item = Effect>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            effects: effects.into_iter().collect(),
        }
    }
}

/// An entry in an enemy's action table.
///
/// Enemy actions are catalog data like cards, plus a selection weight for
/// the intent policy and a description for the telegraph UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyAction {
    /// Display name, also shown as the telegraphed intent.
    pub name: String,

    /// Sand cost to execute.
    pub cost: u32,

    /// Effects, resolved in declaration order.
    pub effects: EffectList,

    /// Base selection weight; the intent policy biases this by health.
    pub weight: f32,

    /// Human-readable description for the telegraph UI.
    pub description: String,
}

impl EnemyAction {
    /// Create an enemy action.
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        effects: impl IntoIterator<Item = Effect>,
        weight: f32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            effects: effects.into_iter().collect(),
            weight,
            description: description.into(),
        }
    }

    /// Whether any effect of this action deals damage.
    #[must_use]
    pub fn deals_damage(&self) -> bool {
        self.effects.iter().any(Effect::is_damage)
    }

    /// Whether any effect of this action grants block.
    #[must_use]
    pub fn grants_block(&self) -> bool {
        self.effects.iter().any(Effect::is_block)
    }
}
