//! The combat session: the top-level state machine.
//!
//! A [`CombatSession`] owns both combatants, the player's hand and discard,
//! the enemy's action table, the visual-effect queue, and the observer bus.
//! It drives every phase transition, invoking the effect resolver and the
//! intent selector at the points the turn structure dictates.
//!
//! ## Phase flow
//!
//! ```text
//! Setup -> PlayerTurn(Start -> Main) <-> EnemyTurn(Start -> Main -> End)
//!                                  \-> Victory | Defeat
//! ```
//!
//! The caller's game loop calls [`CombatSession::update`] once per frame to
//! advance both hour-glasses, and `play_card`/`end_player_turn`
//! synchronously in response to input. Nothing here blocks or yields; the
//! enemy turn runs inline inside `end_player_turn`.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ai::{select_intent, IntentPolicy};
use crate::cards::{validate_actions, Card, CardId, CardRegistry, CatalogError, EnemyAction};
use crate::core::{Combatant, CombatantId, CombatRng, HourGlass};
use crate::effects::{EffectResolver, VisualEffect, VisualEffectQueue};

use super::events::{CombatEvent, EventBus, EventKind};
use super::phase::{CombatOutcome, CombatPhase, TurnPhase};
use super::snapshot::{CombatSnapshot, CombatantSnapshot};

/// A rejected session operation.
///
/// Rejections leave all state untouched and raise no event; the caller can
/// surface them directly ("not enough sand") without consulting engine
/// internals.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActionError {
    /// The hour-glass cannot cover the cost.
    #[error("not enough sand: need {needed}, have {available}")]
    NotEnoughSand { needed: u32, available: u32 },

    /// The operation is not legal in the current phase.
    #[error("not allowed during {phase}")]
    OutOfPhase { phase: CombatPhase },

    /// The card is not in the player's hand.
    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    /// The hand references a card the catalog does not know.
    #[error("{0} is not in the card catalog")]
    UnknownCard(CardId),

    /// The session already reached a terminal phase.
    #[error("combat is over")]
    CombatOver,
}

/// What a successful card play asks of the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Cards the caller should draw into the hand (deck management is the
    /// caller's; the engine only signals).
    pub cards_to_draw: u32,
}

/// Starting stats for one side of an encounter.
#[derive(Clone, Debug)]
pub struct StatBlock {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
}

impl StatBlock {
    /// Create a stat block.
    pub fn new(name: impl Into<String>, health: u32, max_health: u32) -> Self {
        Self {
            name: name.into(),
            health,
            max_health,
        }
    }
}

/// Builder for a [`CombatSession`].
///
/// ## Example
///
/// ```
/// use duat_combat::cards::CardRegistry;
/// use duat_combat::core::CombatRng;
/// use duat_combat::session::{EncounterBuilder, StatBlock};
/// use duat_combat::content;
///
/// let mut registry = CardRegistry::new();
/// registry.register_all(content::starter_cards()).unwrap();
///
/// let mut session = EncounterBuilder::new(
///     StatBlock::new("Player", 50, 50),
///     StatBlock::new("Scarab Guardian", 20, 20),
/// )
/// .cards(registry)
/// .hand(content::starter_hand())
/// .enemy_actions(content::scarab_guardian())
/// .rng(CombatRng::new(42))
/// .build()
/// .unwrap();
///
/// session.start().unwrap();
/// ```
#[derive(Debug)]
pub struct EncounterBuilder {
    player: StatBlock,
    enemy: StatBlock,
    registry: CardRegistry,
    hand: Vec<CardId>,
    enemy_actions: Vec<EnemyAction>,
    policy: IntentPolicy,
    rng: Option<CombatRng>,
    player_sand: u32,
    enemy_sand: u32,
}

impl EncounterBuilder {
    /// Player starts with a partial pool to act on turn one.
    pub const DEFAULT_PLAYER_SAND: u32 = 3;

    /// Enemies start lower, biasing the early advantage to the player.
    pub const DEFAULT_ENEMY_SAND: u32 = 2;

    /// Create a builder for an encounter between the given stat blocks.
    #[must_use]
    pub fn new(player: StatBlock, enemy: StatBlock) -> Self {
        Self {
            player,
            enemy,
            registry: CardRegistry::new(),
            hand: Vec::new(),
            enemy_actions: Vec::new(),
            policy: IntentPolicy::default(),
            rng: None,
            player_sand: Self::DEFAULT_PLAYER_SAND,
            enemy_sand: Self::DEFAULT_ENEMY_SAND,
        }
    }

    /// Set the card catalog.
    #[must_use]
    pub fn cards(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the player's starting hand (ids into the catalog).
    #[must_use]
    pub fn hand(mut self, hand: Vec<CardId>) -> Self {
        self.hand = hand;
        self
    }

    /// Set the enemy's action table.
    #[must_use]
    pub fn enemy_actions(mut self, actions: Vec<EnemyAction>) -> Self {
        self.enemy_actions = actions;
        self
    }

    /// Override the intent policy.
    #[must_use]
    pub fn policy(mut self, policy: IntentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Inject the randomness source. Defaults to entropy seeding.
    #[must_use]
    pub fn rng(mut self, rng: CombatRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Override the player's starting sand.
    #[must_use]
    pub fn player_sand(mut self, sand: u32) -> Self {
        self.player_sand = sand;
        self
    }

    /// Override the enemy's starting sand.
    #[must_use]
    pub fn enemy_sand(mut self, sand: u32) -> Self {
        self.enemy_sand = sand;
        self
    }

    /// Validate the catalog inputs and build the session in `Setup`.
    ///
    /// Call [`CombatSession::start`] to begin the encounter; subscribing
    /// between `build` and `start` guarantees observers see
    /// `combat_started`.
    pub fn build(self) -> Result<CombatSession, CatalogError> {
        let mut player_glass = HourGlass::new();
        player_glass.set(self.player_sand);
        let mut enemy_glass = HourGlass::new();
        enemy_glass.set(self.enemy_sand);

        validate_actions(&self.enemy_actions, enemy_glass.capacity())?;
        for &id in &self.hand {
            if !self.registry.contains(id) {
                return Err(CatalogError::UnknownHandCard(id));
            }
        }

        let player = Combatant::new(
            CombatantId::PLAYER,
            self.player.name,
            true,
            self.player.health,
            self.player.max_health,
            player_glass,
        );
        let enemy = Combatant::new(
            CombatantId::ENEMY,
            self.enemy.name,
            false,
            self.enemy.health,
            self.enemy.max_health,
            enemy_glass,
        );

        Ok(CombatSession {
            phase: CombatPhase::Setup,
            turn: 1,
            clock: Duration::ZERO,
            player,
            enemy,
            registry: self.registry,
            hand: self.hand,
            discard: Vec::new(),
            enemy_actions: self.enemy_actions,
            intent: None,
            policy: self.policy,
            rng: self.rng.unwrap_or_else(CombatRng::from_entropy),
            vfx: VisualEffectQueue::new(),
            events: EventBus::new(),
        })
    }
}

/// One combat encounter, from setup to victory or defeat.
#[derive(Debug)]
pub struct CombatSession {
    phase: CombatPhase,
    /// Turn counter, starting at 1.
    turn: u32,
    /// Combat clock: elapsed time since `start`, advanced by `update`.
    clock: Duration,
    player: Combatant,
    enemy: Combatant,
    registry: CardRegistry,
    hand: Vec<CardId>,
    discard: Vec<CardId>,
    enemy_actions: Vec<EnemyAction>,
    /// Index into `enemy_actions` of the telegraphed intent.
    intent: Option<usize>,
    policy: IntentPolicy,
    rng: CombatRng,
    vfx: VisualEffectQueue,
    events: EventBus,
}

impl CombatSession {
    // === Observation ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Current turn number.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Combat-clock time accumulated by `update`.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// The player combatant.
    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// The enemy combatant.
    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Card ids currently in the player's hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Card ids in the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    /// The card catalog backing this session.
    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.registry
    }

    /// The enemy's telegraphed intent, if any.
    #[must_use]
    pub fn enemy_intent(&self) -> Option<&EnemyAction> {
        self.intent.map(|idx| &self.enemy_actions[idx])
    }

    /// Capture the full per-frame snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot {
            phase: self.phase,
            turn: self.turn,
            player: CombatantSnapshot::of(&self.player),
            enemy: CombatantSnapshot::of(&self.enemy),
            enemy_intent: self.enemy_intent().map(|action| action.name.clone()),
            hand_size: self.hand.len(),
        }
    }

    /// Consume and clear the visual-effect queue, in resolution order.
    pub fn drain_visual_effects(&mut self) -> Vec<VisualEffect> {
        self.vfx.drain()
    }

    /// Register an observer for one event kind.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&CombatEvent) + 'static) {
        self.events.subscribe(kind, handler);
    }

    // === Transitions ===

    /// Begin the encounter: enter the first player turn and announce
    /// `combat_started`.
    ///
    /// Valid only once, from `Setup`.
    pub fn start(&mut self) -> Result<(), ActionError> {
        if self.phase != CombatPhase::Setup {
            return Err(ActionError::OutOfPhase { phase: self.phase });
        }

        info!(player = %self.player.name(), enemy = %self.enemy.name(), "combat started");

        self.phase = CombatPhase::PlayerTurn(TurnPhase::Start);
        let event = CombatEvent::CombatStarted {
            player: CombatantSnapshot::of(&self.player),
            enemy: CombatantSnapshot::of(&self.enemy),
        };
        self.events.emit(&event);

        self.begin_player_turn();
        Ok(())
    }

    /// Play a card from the hand.
    ///
    /// Valid only in the player's main sub-phase, with the cost affordable.
    /// On success the cost is spent, the card moves to the discard, its
    /// effects resolve in declaration order, and `card_played` fires. On
    /// rejection nothing changes and no event fires.
    pub fn play_card(&mut self, id: CardId) -> Result<PlayOutcome, ActionError> {
        if self.phase.is_terminal() {
            return Err(ActionError::CombatOver);
        }
        if !self.phase.is_player_main() {
            warn!(card = %id, phase = %self.phase, "card rejected: wrong phase");
            return Err(ActionError::OutOfPhase { phase: self.phase });
        }

        let position = self
            .hand
            .iter()
            .position(|&held| held == id)
            .ok_or(ActionError::CardNotInHand(id))?;
        let card: Card = self
            .registry
            .get(id)
            .cloned()
            .ok_or(ActionError::UnknownCard(id))?;

        let available = self.player.hourglass().current();
        if !self.player.hourglass().can_afford(card.cost) {
            warn!(card = %card.name, cost = card.cost, available, "card rejected: not enough sand");
            return Err(ActionError::NotEnoughSand {
                needed: card.cost,
                available,
            });
        }

        // All checks passed; from here the play is committed.
        self.player.hourglass_mut().spend(card.cost);
        self.hand.remove(position);
        self.discard.push(id);

        let cards_to_draw = EffectResolver::resolve_all(
            &card.effects,
            &mut self.player,
            &mut self.enemy,
            &mut self.vfx,
            self.clock,
        );

        debug!(card = %card.name, cost = card.cost, "card played");
        let event = CombatEvent::CardPlayed {
            card: id,
            name: card.name,
            cost: card.cost,
        };
        self.events.emit(&event);

        self.check_combat_end();
        Ok(PlayOutcome { cards_to_draw })
    }

    /// End the player's turn and run the enemy turn inline.
    ///
    /// Valid only during a player turn. If the encounter ends mid enemy
    /// turn, the sequence stops at the terminal phase.
    pub fn end_player_turn(&mut self) -> Result<(), ActionError> {
        if self.phase.is_terminal() {
            return Err(ActionError::CombatOver);
        }
        if !matches!(self.phase, CombatPhase::PlayerTurn(_)) {
            return Err(ActionError::OutOfPhase { phase: self.phase });
        }

        self.phase = CombatPhase::PlayerTurn(TurnPhase::End);
        let event = CombatEvent::PlayerTurnEnded { turn: self.turn };
        self.events.emit(&event);

        self.phase = CombatPhase::EnemyTurn(TurnPhase::Start);
        self.run_enemy_turn();
        Ok(())
    }

    /// Advance the combat clock by one frame.
    ///
    /// Accrues both hour-glasses and re-checks the end condition. The only
    /// operation meant to run every frame regardless of input; a silent
    /// no-op once the session is terminal.
    pub fn update(&mut self, delta: Duration) {
        if self.phase.is_terminal() {
            return;
        }

        self.clock += delta;
        self.player.hourglass_mut().accrue(self.clock);
        self.enemy.hourglass_mut().accrue(self.clock);

        self.check_combat_end();
    }

    /// Abort the encounter (the player flees).
    ///
    /// A forced transition to `Defeat`; fires the terminal event like any
    /// other loss. No operation is ever in flight across frames, so there
    /// is nothing to interrupt.
    pub fn concede(&mut self) -> Result<(), ActionError> {
        if self.phase.is_terminal() {
            return Err(ActionError::CombatOver);
        }
        info!("player conceded");
        self.end_combat(CombatOutcome::Defeat);
        Ok(())
    }

    // === Internals ===

    fn begin_player_turn(&mut self) {
        self.player.start_turn();
        self.phase = CombatPhase::PlayerTurn(TurnPhase::Main);

        let event = CombatEvent::PlayerTurnStarted { turn: self.turn };
        self.events.emit(&event);
    }

    fn run_enemy_turn(&mut self) {
        self.enemy.start_turn();

        self.intent = select_intent(
            &self.enemy_actions,
            &self.enemy,
            &self.policy,
            &mut self.rng,
        );

        let event = CombatEvent::EnemyTurnStarted {
            turn: self.turn,
            intent: self.enemy_intent().map(|action| action.name.clone()),
        };
        self.events.emit(&event);

        self.phase = CombatPhase::EnemyTurn(TurnPhase::Main);

        if let Some(idx) = self.intent {
            let action = self.enemy_actions[idx].clone();
            // Selection guarantees affordability, but spend re-checks; a
            // refused spend degrades to a passed turn.
            if self.enemy.hourglass_mut().spend(action.cost) {
                EffectResolver::resolve_all(
                    &action.effects,
                    &mut self.enemy,
                    &mut self.player,
                    &mut self.vfx,
                    self.clock,
                );

                debug!(action = %action.name, cost = action.cost, "enemy action executed");
                let event = CombatEvent::EnemyActionExecuted {
                    name: action.name,
                    cost: action.cost,
                };
                self.events.emit(&event);
            }
        } else {
            debug!(turn = self.turn, "enemy passes: no affordable action");
        }

        self.check_combat_end();
        if self.phase.is_terminal() {
            return;
        }

        self.phase = CombatPhase::EnemyTurn(TurnPhase::End);
        let event = CombatEvent::EnemyTurnEnded { turn: self.turn };
        self.events.emit(&event);

        self.turn += 1;
        self.phase = CombatPhase::PlayerTurn(TurnPhase::Start);
        self.begin_player_turn();
    }

    fn check_combat_end(&mut self) {
        if self.phase.is_terminal() {
            return;
        }

        // Tie-break rule: player defeat is evaluated first, so a tick that
        // fells both combatants is a Defeat.
        if !self.player.is_alive() {
            self.end_combat(CombatOutcome::Defeat);
        } else if !self.enemy.is_alive() {
            self.end_combat(CombatOutcome::Victory);
        }
    }

    fn end_combat(&mut self, outcome: CombatOutcome) {
        self.phase = match outcome {
            CombatOutcome::Victory => CombatPhase::Victory,
            CombatOutcome::Defeat => CombatPhase::Defeat,
        };

        info!(?outcome, turns = self.turn, "combat ended");
        let event = CombatEvent::CombatEnded {
            outcome,
            player: CombatantSnapshot::of(&self.player),
            enemy: CombatantSnapshot::of(&self.enemy),
            turns: self.turn,
        };
        self.events.emit(&event);
    }
}
