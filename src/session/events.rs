//! Observer events.
//!
//! The session announces its transitions through a small closed event set.
//! Observers subscribe per event kind; handlers receive a typed payload
//! rather than a loose dictionary, and each handler runs isolated - a
//! panicking observer is caught and logged without touching combat state or
//! the remaining handlers.

use rustc_hash::FxHashMap;

use crate::cards::CardId;

use super::phase::CombatOutcome;
use super::snapshot::CombatantSnapshot;

/// The closed set of observable session events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    CombatStarted,
    CardPlayed,
    PlayerTurnStarted,
    PlayerTurnEnded,
    EnemyTurnStarted,
    EnemyActionExecuted,
    EnemyTurnEnded,
    CombatEnded,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::CombatStarted => "combat_started",
            EventKind::CardPlayed => "card_played",
            EventKind::PlayerTurnStarted => "player_turn_started",
            EventKind::PlayerTurnEnded => "player_turn_ended",
            EventKind::EnemyTurnStarted => "enemy_turn_started",
            EventKind::EnemyActionExecuted => "enemy_action_executed",
            EventKind::EnemyTurnEnded => "enemy_turn_ended",
            EventKind::CombatEnded => "combat_ended",
        };
        write!(f, "{name}")
    }
}

/// A session event with its payload.
#[derive(Clone, Debug)]
pub enum CombatEvent {
    /// The encounter began.
    CombatStarted {
        player: CombatantSnapshot,
        enemy: CombatantSnapshot,
    },

    /// The player successfully played a card.
    CardPlayed {
        card: CardId,
        name: String,
        cost: u32,
    },

    /// A new player turn reached its main sub-phase.
    PlayerTurnStarted { turn: u32 },

    /// The player ended their turn.
    PlayerTurnEnded { turn: u32 },

    /// The enemy turn began; the intent is what it telegraphs.
    EnemyTurnStarted {
        turn: u32,
        intent: Option<String>,
    },

    /// The enemy executed its telegraphed action.
    EnemyActionExecuted { name: String, cost: u32 },

    /// The enemy turn finished.
    EnemyTurnEnded { turn: u32 },

    /// Terminal: the encounter is over. Fires exactly once per session.
    CombatEnded {
        outcome: CombatOutcome,
        player: CombatantSnapshot,
        enemy: CombatantSnapshot,
        turns: u32,
    },
}

impl CombatEvent {
    /// The kind this event is dispatched under.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            CombatEvent::CombatStarted { .. } => EventKind::CombatStarted,
            CombatEvent::CardPlayed { .. } => EventKind::CardPlayed,
            CombatEvent::PlayerTurnStarted { .. } => EventKind::PlayerTurnStarted,
            CombatEvent::PlayerTurnEnded { .. } => EventKind::PlayerTurnEnded,
            CombatEvent::EnemyTurnStarted { .. } => EventKind::EnemyTurnStarted,
            CombatEvent::EnemyActionExecuted { .. } => EventKind::EnemyActionExecuted,
            CombatEvent::EnemyTurnEnded { .. } => EventKind::EnemyTurnEnded,
            CombatEvent::CombatEnded { .. } => EventKind::CombatEnded,
        }
    }
}

/// A subscribed observer callback.
pub type EventHandler = Box<dyn FnMut(&CombatEvent)>;

/// Registry of observers, keyed by event kind.
#[derive(Default)]
pub struct EventBus {
    handlers: FxHashMap<EventKind, Vec<EventHandler>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&CombatEvent) + 'static) {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Dispatch an event to every handler subscribed to its kind.
    ///
    /// Handlers run in subscription order. A panicking handler is caught
    /// and logged; the remaining handlers still run.
    pub fn emit(&mut self, event: &CombatEvent) {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            return;
        };

        for handler in handlers.iter_mut() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(event);
            }));
            if result.is_err() {
                tracing::error!(event = %event.kind(), "observer handler panicked");
            }
        }
    }

    /// Number of handlers subscribed to a kind.
    #[must_use]
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<String> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| format!("{kind}: {}", handlers.len()))
            .collect();
        write!(f, "EventBus {{ {} }}", counts.join(", "))
    }
}
