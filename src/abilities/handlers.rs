//! Death ability handlers.
//!
//! One handler per [`Ability`] variant, selected by an exhaustive match.
//! Handlers receive a copy of the dying unit (already flagged by the death
//! pass) and the world. They only ever touch units whose death has not
//! been processed, so a handler can never re-arm or re-mutate a unit the
//! death pass has already handled.

use super::ability::Ability;
use crate::core::{GameRng, Side, World};
use crate::effects::{BarrierKind, Effect};
use crate::units::{Modifier, Unit};
use crate::cards::TroopKind;

/// What a handler may reach while it runs.
pub struct AbilityContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut GameRng,
}

impl<'a> AbilityContext<'a> {
    #[must_use]
    pub fn new(world: &'a mut World, rng: &'a mut GameRng) -> Self {
        Self { world, rng }
    }
}

fn enemies_of(world: &mut World, side: Side) -> impl Iterator<Item = &mut Unit> {
    world
        .units_mut()
        .iter_mut()
        .filter(move |u| u.side != side && u.is_active())
}

impl Ability {
    /// Run this ability for `dying`.
    pub fn apply(&self, dying: &Unit, ctx: &mut AbilityContext<'_>) {
        let world = &mut *ctx.world;
        match *self {
            Ability::HighestHealthStrike { damage } => {
                let target = enemies_of(world, dying.side)
                    .filter(|u| u.kind == TroopKind::Ground)
                    .max_by(|a, b| a.health.total_cmp(&b.health));
                if let Some(target) = target {
                    log::debug!("{} strikes {} for {}", dying.id, target.id, damage);
                    target.take_damage(damage);
                }
            }

            Ability::LaneArrow {
                lane_damage,
                tower_damage,
            } => {
                for unit in enemies_of(world, dying.side).filter(|u| u.lane == dying.lane) {
                    unit.take_damage(lane_damage);
                }
                world.side_mut(dying.side.opponent()).tower.damage(tower_damage);
            }

            Ability::Explosion {
                range,
                ally_damage_percent,
            } => {
                for unit in world.units_mut().iter_mut() {
                    if !unit.is_active() || unit.id == dying.id || (unit.position - dying.position).abs() > range {
                        continue;
                    }
                    if unit.side == dying.side {
                        let loss = unit.health * ally_damage_percent;
                        unit.take_damage(loss);
                    } else {
                        unit.health = 0.0;
                    }
                }
            }

            Ability::PoisonZone {
                damage_per_second,
                radius,
                duration_ms,
            } => {
                world.add_effect(Effect::poison(
                    dying.side,
                    dying.lane,
                    dying.position,
                    radius,
                    damage_per_second,
                    duration_ms,
                ));
            }

            Ability::Roll { range } => {
                let hit = dying.attack.unwrap_or(0.0);
                for unit in enemies_of(world, dying.side).filter(|u| (u.position - dying.position).abs() < range) {
                    unit.take_damage(hit);
                }
            }

            Ability::DeathBuff {
                attack_percent,
                health_percent,
                duration_ms,
            } => {
                let modifier = Modifier::from_percent(attack_percent, health_percent, duration_ms);
                for unit in world.units_mut().iter_mut() {
                    if unit.side == dying.side && unit.id != dying.id && unit.is_active() {
                        unit.apply_modifier(modifier.clone());
                    }
                }
            }

            Ability::CoalBarrier { radius, duration_ms } => {
                world.add_effect(Effect::barrier(
                    BarrierKind::Coal,
                    dying.side,
                    dying.lane,
                    dying.position,
                    radius,
                    duration_ms,
                ));
            }

            Ability::BridgeBlock { radius, duration_ms } => {
                let bridge = world.bridge_position();
                world.add_effect(Effect::barrier(
                    BarrierKind::Bridge,
                    dying.side,
                    dying.lane,
                    bridge,
                    radius,
                    duration_ms,
                ));
            }

            Ability::Summon { count, health, attack } => {
                for _ in 0..count {
                    let id = world.alloc_unit_id();
                    world.add_unit(Unit::summon(
                        id,
                        "Pathak",
                        dying.side,
                        dying.lane,
                        dying.position,
                        health,
                        attack,
                    ));
                }
            }

            Ability::Debuff { percent } => {
                let factor = 1.0 - percent;
                for unit in enemies_of(world, dying.side) {
                    unit.scale_speed(factor);
                    unit.scale_attack(factor);
                }
            }

            Ability::Steal { min, max } => {
                let rolled = ctx.rng.gen_range_inclusive(min, max);
                let cap = world.resource_cap();
                let (own, enemy) = world.sides_mut().pair_mut(dying.side);
                let taken = enemy.drain(rolled);
                let credited = own.credit(taken, cap);
                log::debug!(
                    "{} stole {} (rolled {}, credited {})",
                    dying.side,
                    taken,
                    rolled,
                    credited
                );
            }
        }
    }
}
