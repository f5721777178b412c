//! Combatant entity model.
//!
//! A [`Combatant`] is one side of an encounter: health, a per-turn block
//! pool, timed statuses, and an owned [`HourGlass`]. Both combatants are
//! owned exclusively by the combat session for its lifetime; mutation goes
//! through the session and the effect resolver.
//!
//! Mutating operations report the *actual* change (damage after block
//! absorption, healing after the max-health clamp) so visual effects can
//! show what really happened rather than the nominal card numbers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::clock::HourGlass;
use super::status::StatusKind;

/// Stable identifier for a combatant within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// The player side of every encounter.
    pub const PLAYER: CombatantId = CombatantId(0);

    /// The enemy side of every encounter.
    pub const ENEMY: CombatantId = CombatantId(1);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combatant({})", self.0)
    }
}

/// One participant in combat.
#[derive(Clone, Debug)]
pub struct Combatant {
    id: CombatantId,
    name: String,
    is_player: bool,
    health: u32,
    max_health: u32,
    /// Per-turn damage mitigation, reset at the start of this combatant's turn.
    block: u32,
    /// Remaining turns per active status.
    statuses: FxHashMap<StatusKind, u32>,
    hourglass: HourGlass,
}

impl Combatant {
    /// Create a combatant.
    ///
    /// `health` is clamped to `max_health`.
    #[must_use]
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        is_player: bool,
        health: u32,
        max_health: u32,
        hourglass: HourGlass,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_player,
            health: health.min(max_health),
            max_health,
            block: 0,
            statuses: FxHashMap::default(),
            hourglass,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> CombatantId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this combatant is the player side.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.is_player
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current block pool.
    #[must_use]
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Whether this combatant is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health as a fraction of maximum, for AI policy decisions.
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    /// The owned hour-glass.
    #[must_use]
    pub fn hourglass(&self) -> &HourGlass {
        &self.hourglass
    }

    /// Mutable access to the owned hour-glass.
    pub fn hourglass_mut(&mut self) -> &mut HourGlass {
        &mut self.hourglass
    }

    /// Take damage, block absorbing first.
    ///
    /// Block soaks up to its current value; the remainder reduces health,
    /// clamped at zero. Returns the health actually lost, which may be less
    /// than `amount`.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let absorbed = self.block.min(amount);
        self.block -= absorbed;

        let before = self.health;
        self.health = self.health.saturating_sub(amount - absorbed);
        before - self.health
    }

    /// Heal up to max health. Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Add block. Unconditional; there is no upper bound.
    pub fn add_block(&mut self, amount: u32) {
        self.block += amount;
    }

    /// Apply a timed status for `turns` turns.
    ///
    /// Re-applying an active status keeps the longer of the two durations.
    pub fn apply_status(&mut self, kind: StatusKind, turns: u32) {
        if turns == 0 {
            return;
        }
        let entry = self.statuses.entry(kind).or_insert(0);
        *entry = (*entry).max(turns);
    }

    /// Remaining turns of a status, if active.
    #[must_use]
    pub fn status(&self, kind: StatusKind) -> Option<u32> {
        self.statuses.get(&kind).copied()
    }

    /// Active statuses with their remaining turns.
    pub fn statuses(&self) -> impl Iterator<Item = (StatusKind, u32)> + '_ {
        self.statuses.iter().map(|(&kind, &turns)| (kind, turns))
    }

    /// Start-of-turn upkeep: block resets, every status ticks down by one
    /// and expires at zero.
    pub fn start_turn(&mut self) {
        self.block = 0;

        for turns in self.statuses.values_mut() {
            *turns -= 1;
        }
        self.statuses.retain(|_, turns| *turns > 0);
    }
}
