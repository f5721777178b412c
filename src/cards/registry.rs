//! Card registry: validated catalog ingest and lookup.
//!
//! The registry is the boundary where externally supplied content enters
//! the engine. Everything it accepts has been checked against the catalog
//! contract (unique ids, affordable-in-principle costs, non-empty effect
//! lists), so the rest of the engine can trust card data unconditionally.
//!
//! A malformed catalog is a contract violation, not a gameplay condition:
//! ingest fails loudly with a [`CatalogError`] naming the offending entry.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::HourGlass;

use super::definition::{Card, CardId, EnemyAction};

/// A contract violation in externally supplied catalog content.
#[derive(Clone, Debug, Error)]
pub enum CatalogError {
    /// Two catalog entries share an id.
    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),

    /// A cost no hour-glass state could ever cover.
    #[error("card {id} costs {cost} sand but the hour-glass holds at most {bound}")]
    CostOutOfRange { id: CardId, cost: u32, bound: u32 },

    /// A card that does nothing.
    #[error("card {0} has an empty effect list")]
    EmptyEffects(CardId),

    /// An enemy action with a cost above the enemy's capacity.
    #[error("enemy action `{name}` costs {cost} sand but the hour-glass holds at most {bound}")]
    ActionCostOutOfRange { name: String, cost: u32, bound: u32 },

    /// An enemy action that does nothing.
    #[error("enemy action `{0}` has an empty effect list")]
    ActionEmptyEffects(String),

    /// A selection weight the weighted draw cannot use.
    #[error("enemy action `{name}` has invalid selection weight {weight}")]
    InvalidWeight { name: String, weight: f32 },

    /// A starting hand referencing a card the catalog does not contain.
    #[error("starting hand references unknown card {0}")]
    UnknownHandCard(CardId),

    /// The catalog source was not valid JSON for the expected shape.
    #[error("malformed catalog JSON: {0}")]
    Json(String),
}

/// Registry of card definitions, keyed by id.
///
/// ## Example
///
/// ```
/// use duat_combat::cards::{Card, CardId, CardRegistry};
/// use duat_combat::effects::Effect;
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(Card::new(CardId::new(1), "Tomb Strike", 1, [Effect::damage(6)]))
///     .unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Tomb Strike");
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    /// Upper bound for card costs; the player's hour-glass capacity.
    cost_bound: u32,
}

impl CardRegistry {
    /// Create an empty registry with the default cost bound
    /// ([`HourGlass::DEFAULT_CAPACITY`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_cost_bound(HourGlass::DEFAULT_CAPACITY)
    }

    /// Create an empty registry bounding card costs at `bound`
    /// (for encounters with a raised hour-glass capacity).
    #[must_use]
    pub fn with_cost_bound(bound: u32) -> Self {
        Self {
            cards: FxHashMap::default(),
            cost_bound: bound,
        }
    }

    /// Register a card after contract validation.
    pub fn register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        if card.cost > self.cost_bound {
            return Err(CatalogError::CostOutOfRange {
                id: card.id,
                cost: card.cost,
                bound: self.cost_bound,
            });
        }
        if card.effects.is_empty() {
            return Err(CatalogError::EmptyEffects(card.id));
        }

        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register every card in an iterator, stopping at the first violation.
    pub fn register_all(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<(), CatalogError> {
        for card in cards {
            self.register(card)?;
        }
        Ok(())
    }

    /// Ingest a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;

        let mut registry = Self::new();
        registry.register_all(cards)?;
        Ok(registry)
    }

    /// Get a card definition by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an enemy action table against the enemy's hour-glass capacity.
///
/// Applies the same catalog contract as card ingest: costs must be coverable
/// in principle, effect lists non-empty, weights positive and finite.
pub fn validate_actions(actions: &[EnemyAction], capacity: u32) -> Result<(), CatalogError> {
    for action in actions {
        if action.cost > capacity {
            return Err(CatalogError::ActionCostOutOfRange {
                name: action.name.clone(),
                cost: action.cost,
                bound: capacity,
            });
        }
        if action.effects.is_empty() {
            return Err(CatalogError::ActionEmptyEffects(action.name.clone()));
        }
        if !action.weight.is_finite() || action.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                name: action.name.clone(),
                weight: action.weight,
            });
        }
    }
    Ok(())
}
