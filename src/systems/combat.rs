//! Melee contact combat.
//!
//! Every unit with an attack damages every opposing unit in its lane that
//! is strictly closer than the melee range. There is no attack cooldown:
//! contact deals the full attack every tick. Damage is gathered first and
//! applied afterwards, so iteration order never matters. A unit that was
//! already at or below zero health when the round started (a potion kill
//! awaiting the death pass) does not attack.

use crate::core::World;

/// Apply one round of contact damage. Returns the number of hits dealt.
pub fn resolve_combat(world: &mut World, melee_range: f64) -> usize {
    let units = world.units();
    let mut damage = vec![0.0; units.len()];
    let mut hits = 0;

    for attacker in units.iter().filter(|u| u.is_active() && !u.is_dead()) {
        let Some(attack) = attacker.attack else {
            continue;
        };
        for (slot, target) in units.iter().enumerate() {
            if target.is_active()
                && target.side != attacker.side
                && target.lane == attacker.lane
                && (target.position - attacker.position).abs() < melee_range
            {
                damage[slot] += attack;
                hits += 1;
            }
        }
    }

    for (unit, amount) in world.units_mut().iter_mut().zip(damage) {
        if amount != 0.0 {
            unit.take_damage(amount);
        }
    }
    log::trace!("combat: {} hits", hits);
    hits
}
