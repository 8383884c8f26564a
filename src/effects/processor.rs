//! The effect pass.
//!
//! Runs once per tick after combat. Counts down every active effect,
//! applies damage-over-time to opposing units inside each poison zone,
//! counts down the expiring modifiers carried by units, and finally drops
//! the effects whose duration ran out.

use super::effect::EffectKind;
use crate::core::World;

/// Totals from one effect pass, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectPassReport {
    /// Health removed by poison zones.
    pub poison_damage: f64,
    /// Modifiers reverted on units.
    pub modifiers_expired: usize,
    /// Effects removed from the world.
    pub effects_expired: usize,
}

/// Advance every effect and modifier by `elapsed_ms`.
pub fn process_effects(world: &mut World, elapsed_ms: f64) -> EffectPassReport {
    let mut report = EffectPassReport::default();

    for effect in world.effects_mut().iter_mut() {
        effect.duration_ms = (effect.duration_ms - elapsed_ms).max(0.0);
    }

    let effects = world.effects().clone();
    let seconds = elapsed_ms / 1000.0;
    for effect in effects.iter() {
        let EffectKind::Poison { damage_per_second } = effect.kind else {
            continue;
        };
        let damage = damage_per_second * seconds;
        for unit in world.units_mut().iter_mut() {
            if unit.is_active() && effect.covers_enemy(unit.side, unit.lane, unit.position) {
                unit.take_damage(damage);
                report.poison_damage += damage;
            }
        }
    }

    for unit in world.units_mut().iter_mut() {
        if unit.is_active() && !unit.modifiers.is_empty() {
            report.modifiers_expired += unit.tick_modifiers(elapsed_ms);
        }
    }

    let before = world.effects().len();
    world.effects_mut().retain(|e| !e.is_expired());
    report.effects_expired = before - world.effects().len();

    log::trace!(
        "effects: {} poison damage, {} modifiers expired, {} effects expired",
        report.poison_damage,
        report.modifiers_expired,
        report.effects_expired
    );
    report
}
