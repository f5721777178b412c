//! Enemy intent selection.
//!
//! Before each enemy turn resolves, the selector picks the action the enemy
//! will telegraph to the player. The policy is deliberately simple:
//!
//! 1. Filter the action table to what the enemy's hour-glass can afford.
//!    An empty affordable set means "no action" - the turn passes and sand
//!    keeps accruing.
//! 2. Bias base weights by health: a wounded enemy (below the low-health
//!    threshold) favors block actions; a healthy one favors damage.
//! 3. Draw one action weighted-randomly from the affordable set.
//!
//! All randomness flows through the injected [`CombatRng`], so enemy
//! decisions replay exactly under a fixed seed.

use crate::cards::EnemyAction;
use crate::core::{Combatant, CombatRng};

/// Tuning knobs for the health-aware weighted policy.
#[derive(Clone, Copy, Debug)]
pub struct IntentPolicy {
    /// Health fraction below which the enemy turns defensive.
    pub low_health_threshold: f32,
    /// Weight multiplier for block actions when wounded.
    pub defensive_bonus: f32,
    /// Weight multiplier for damage actions when healthy.
    pub aggressive_bonus: f32,
}

impl Default for IntentPolicy {
    fn default() -> Self {
        Self {
            low_health_threshold: 0.3,
            defensive_bonus: 1.5,
            aggressive_bonus: 1.2,
        }
    }
}

impl IntentPolicy {
    /// Compute the post-bias weight of one action for the given enemy.
    #[must_use]
    pub fn biased_weight(&self, action: &EnemyAction, enemy: &Combatant) -> f32 {
        let mut weight = action.weight;

        if enemy.health_fraction() < self.low_health_threshold {
            // Low health: prefer defensive actions
            if action.grants_block() {
                weight *= self.defensive_bonus;
            }
        } else if action.deals_damage() {
            // Higher health: prefer aggressive actions
            weight *= self.aggressive_bonus;
        }

        weight
    }
}

/// Indices of the actions the enemy can currently afford.
#[must_use]
pub fn affordable_actions(actions: &[EnemyAction], enemy: &Combatant) -> Vec<usize> {
    actions
        .iter()
        .enumerate()
        .filter(|(_, action)| enemy.hourglass().can_afford(action.cost))
        .map(|(idx, _)| idx)
        .collect()
}

/// Choose the enemy's next action, returning its index into `actions`.
///
/// Returns `None` when nothing is affordable: the enemy turn passes with no
/// effect. The chosen action always satisfies
/// `cost <= enemy.hourglass().current()` at selection time.
pub fn select_intent(
    actions: &[EnemyAction],
    enemy: &Combatant,
    policy: &IntentPolicy,
    rng: &mut CombatRng,
) -> Option<usize> {
    let affordable = affordable_actions(actions, enemy);
    if affordable.is_empty() {
        return None;
    }

    let weights: Vec<f32> = affordable
        .iter()
        .map(|&idx| policy.biased_weight(&actions[idx], enemy))
        .collect();

    let picked = rng.choose_weighted(&weights)?;
    Some(affordable[picked])
}
