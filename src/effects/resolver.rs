//! Effect resolution - applying effect descriptors to combatants.
//!
//! The resolver is stateless: it maps one effect plus a (source, opponent)
//! pair to entity mutations, pushes exactly one visual-effect descriptor per
//! resolution, and reports card-draw signals back to the caller.
//!
//! With [`Effect`] and [`Target`] being closed enums, every descriptor that
//! deserializes is resolvable - there is no runtime "unknown effect" path.

use std::time::Duration;

use crate::core::Combatant;

use super::effect::{Effect, Target};
use super::vfx::{VisualEffect, VisualEffectKind, VisualEffectQueue};

/// Resolves effects against a pair of combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a single effect.
    ///
    /// `source` is the combatant playing the card or action; `opponent` is
    /// the other side. Returns the number of cards the caller should draw
    /// (zero for everything but `Draw`).
    pub fn resolve(
        effect: Effect,
        source: &mut Combatant,
        opponent: &mut Combatant,
        queue: &mut VisualEffectQueue,
        now: Duration,
    ) -> u32 {
        let mut draw_requested = 0;

        let (kind, target_id, amount) = match effect {
            Effect::Damage { amount, target } => {
                let target = Self::pick(target, source, opponent);
                let dealt = target.take_damage(amount);
                (VisualEffectKind::Damage, target.id(), dealt)
            }

            Effect::Heal { amount, target } => {
                let target = Self::pick(target, source, opponent);
                let healed = target.heal(amount);
                (VisualEffectKind::Heal, target.id(), healed)
            }

            Effect::Block { amount, target } => {
                let target = Self::pick(target, source, opponent);
                target.add_block(amount);
                (VisualEffectKind::Block, target.id(), amount)
            }

            Effect::GainSand { amount } => {
                let gained = source.hourglass_mut().gain(amount);
                (VisualEffectKind::SandGain, source.id(), gained)
            }

            Effect::Draw { count } => {
                // Deck management is external; the resolver only signals.
                draw_requested = count;
                (VisualEffectKind::Draw, source.id(), count)
            }

            Effect::ApplyStatus {
                kind,
                turns,
                target,
            } => {
                let target = Self::pick(target, source, opponent);
                target.apply_status(kind, turns);
                (VisualEffectKind::Status(kind), target.id(), turns)
            }
        };

        queue.push(VisualEffect {
            kind,
            target: target_id,
            amount,
            timestamp: now,
        });

        draw_requested
    }

    /// Resolve an ordered effect list, in declaration order.
    ///
    /// Returns the total cards the caller should draw.
    pub fn resolve_all(
        effects: &[Effect],
        source: &mut Combatant,
        opponent: &mut Combatant,
        queue: &mut VisualEffectQueue,
        now: Duration,
    ) -> u32 {
        effects
            .iter()
            .map(|&effect| Self::resolve(effect, source, opponent, queue, now))
            .sum()
    }

    fn pick<'a>(
        target: Target,
        source: &'a mut Combatant,
        opponent: &'a mut Combatant,
    ) -> &'a mut Combatant {
        match target {
            Target::Source => source,
            Target::Opponent => opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombatantId, HourGlass, StatusKind};

    fn pair() -> (Combatant, Combatant) {
        let player = Combatant::new(
            CombatantId::PLAYER,
            "Player",
            true,
            50,
            50,
            HourGlass::new(),
        );
        let enemy = Combatant::new(
            CombatantId::ENEMY,
            "Scarab",
            false,
            20,
            20,
            HourGlass::new(),
        );
        (player, enemy)
    }

    #[test]
    fn test_damage_routes_to_opponent() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();

        EffectResolver::resolve(
            Effect::damage(8),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(enemy.health(), 12);
        assert_eq!(player.health(), 50);
    }

    #[test]
    fn test_vfx_reports_actual_damage() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();
        enemy.add_block(10);

        EffectResolver::resolve(
            Effect::damage(15),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::from_secs(2),
        );

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind, VisualEffectKind::Damage);
        assert_eq!(drained[0].target, CombatantId::ENEMY);
        assert_eq!(drained[0].amount, 5); // 10 absorbed by block
        assert_eq!(drained[0].timestamp, Duration::from_secs(2));
    }

    #[test]
    fn test_heal_routes_to_source() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();
        player.take_damage(20);

        EffectResolver::resolve(
            Effect::heal(5),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(player.health(), 35);
        assert_eq!(enemy.health(), 20);
    }

    #[test]
    fn test_gain_sand_caps_at_capacity() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();
        player.hourglass_mut().set(5);

        EffectResolver::resolve(
            Effect::gain_sand(3),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(player.hourglass().current(), 6);
        // The descriptor shows the single grain that actually fit
        assert_eq!(queue.drain()[0].amount, 1);
    }

    #[test]
    fn test_draw_signals_without_mutating() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();

        let draw = EffectResolver::resolve(
            Effect::draw(2),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(draw, 2);
        assert_eq!(player.health(), 50);
        assert_eq!(enemy.health(), 20);
        assert_eq!(queue.drain()[0].kind, VisualEffectKind::Draw);
    }

    #[test]
    fn test_apply_status() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();

        EffectResolver::resolve(
            Effect::afflict(StatusKind::MummyWrap, 2),
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(enemy.status(StatusKind::MummyWrap), Some(2));
        assert_eq!(player.status(StatusKind::MummyWrap), None);
        assert_eq!(
            queue.drain()[0].kind,
            VisualEffectKind::Status(StatusKind::MummyWrap)
        );
    }

    #[test]
    fn test_resolve_all_is_ordered() {
        let (mut player, mut enemy) = pair();
        let mut queue = VisualEffectQueue::new();

        let effects = [Effect::heal(8), Effect::draw(1), Effect::damage(6)];
        player.take_damage(20);

        let draw = EffectResolver::resolve_all(
            &effects,
            &mut player,
            &mut enemy,
            &mut queue,
            Duration::ZERO,
        );

        assert_eq!(draw, 1);
        let kinds: Vec<_> = queue.drain().into_iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                VisualEffectKind::Heal,
                VisualEffectKind::Draw,
                VisualEffectKind::Damage
            ]
        );
    }
}
