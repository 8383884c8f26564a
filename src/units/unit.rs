//! Runtime unit state.
//!
//! A `Unit` is one combatant on the field. It is created from a card
//! template by a deploy, or directly by a summoning ability, and lives in
//! the world until the death pass has handled it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::modifier::Modifier;
use crate::abilities::AbilityId;
use crate::cards::{Attributes, CardId, CardTemplate, TroopKind};
use crate::core::{Side, UnitId};

/// One deployed combatant or summon.
///
/// Health is a real number and may sit at or below zero between the phase
/// that dealt the damage and the death pass. Once `death_processed` is set
/// the unit is inert: movement and combat skip it and it is pruned at the
/// end of the tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,

    /// Card this unit was spawned from (summons carry their own id).
    pub card: CardId,

    pub name: String,

    pub side: Side,

    pub lane: usize,

    /// Position along the lane, always within `[0, lane_length]` after movement.
    pub position: f64,

    pub health: f64,

    /// Health at spawn, when the card specified one.
    pub max_health: Option<f64>,

    pub attack: Option<f64>,

    pub speed: Option<f64>,

    pub kind: TroopKind,

    pub ability: Option<AbilityId>,

    pub params: Attributes,

    /// Active expiring modifiers.
    pub modifiers: SmallVec<[Modifier; 2]>,

    /// Set exactly once, by the death pass, before the ability runs.
    pub death_processed: bool,
}

impl Unit {
    /// Instantiate a unit from a card template.
    ///
    /// Templates without health get `default_health`, which also becomes
    /// the unit's maximum.
    #[must_use]
    pub fn from_template(
        id: UnitId,
        template: &CardTemplate,
        side: Side,
        lane: usize,
        position: f64,
        default_health: f64,
    ) -> Self {
        let health = template.health.unwrap_or(default_health);
        Self {
            id,
            card: template.id.clone(),
            name: template.name.clone(),
            side,
            lane,
            position,
            health,
            max_health: Some(health),
            attack: template.attack,
            speed: template.speed,
            kind: template.kind,
            ability: template.ability.clone(),
            params: template.params.clone(),
            modifiers: SmallVec::new(),
            death_processed: false,
        }
    }

    /// Create a bare summoned flier with no speed, ability or maximum health.
    #[must_use]
    pub fn summon(
        id: UnitId,
        name: &str,
        side: Side,
        lane: usize,
        position: f64,
        health: f64,
        attack: f64,
    ) -> Self {
        Self {
            id,
            card: CardId::new(name.to_lowercase()),
            name: name.to_string(),
            side,
            lane,
            position,
            health,
            max_health: None,
            attack: Some(attack),
            speed: None,
            kind: TroopKind::Air,
            ability: None,
            params: Attributes::new(),
            modifiers: SmallVec::new(),
            death_processed: false,
        }
    }

    /// Alive: positive health and not yet handled by the death pass.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0 && !self.death_processed
    }

    /// Health at or below zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Whether this unit may still be moved or fight this tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.death_processed
    }

    /// Fraction of maximum health remaining, for display.
    #[must_use]
    pub fn health_ratio(&self, fallback_max: f64) -> f64 {
        let max = self.max_health.unwrap_or(fallback_max);
        if max <= 0.0 {
            return 0.0;
        }
        (self.health / max).clamp(0.0, 1.0)
    }

    /// Subtract health.
    pub fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Multiply attack; a unit without attack stays without.
    pub fn scale_attack(&mut self, factor: f64) {
        if let Some(attack) = self.attack.as_mut() {
            *attack *= factor;
        }
    }

    /// Multiply speed; a unit without speed stays stationary.
    pub fn scale_speed(&mut self, factor: f64) {
        if let Some(speed) = self.speed.as_mut() {
            *speed *= factor;
        }
    }

    /// Apply a modifier now and keep it until it expires.
    pub fn apply_modifier(&mut self, modifier: Modifier) {
        self.scale_attack(modifier.attack_factor);
        self.health *= modifier.health_factor;
        self.modifiers.push(modifier);
    }

    /// Count down modifiers, reverting and dropping the expired ones.
    ///
    /// Returns how many modifiers expired.
    pub fn tick_modifiers(&mut self, elapsed_ms: f64) -> usize {
        let mut expired = SmallVec::<[Modifier; 2]>::new();
        self.modifiers.retain(|m| {
            if m.tick(elapsed_ms) {
                expired.push(m.clone());
                false
            } else {
                true
            }
        });

        for m in &expired {
            if let Some(attack) = self.attack.as_mut() {
                *attack /= m.attack_factor;
            }
            self.health /= m.health_factor;
        }
        expired.len()
    }

    /// Damage this unit deals when it reaches the enemy tower: its
    /// current attack, or `default_hit` when it has none.
    #[must_use]
    pub fn tower_hit(&self, default_hit: f64) -> f64 {
        self.attack.unwrap_or(default_hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute() -> CardTemplate {
        CardTemplate::new("brute", "Brute", 4, TroopKind::Ground)
            .with_health(150.0)
            .with_speed(0.8)
            .with_attack(30.0)
    }

    #[test]
    fn test_from_template() {
        let unit = Unit::from_template(UnitId(1), &brute(), Side::Ai, 1, 19.0, 100.0);
        assert_eq!(unit.health, 150.0);
        assert_eq!(unit.max_health, Some(150.0));
        assert_eq!(unit.side, Side::Ai);
        assert_eq!(unit.lane, 1);
        assert!(unit.is_alive());
    }

    #[test]
    fn test_default_health() {
        let card = CardTemplate::new("thief", "Thief", 5, TroopKind::Underground);
        let unit = Unit::from_template(UnitId(1), &card, Side::Player, 0, 0.0, 100.0);
        assert_eq!(unit.health, 100.0);
        assert_eq!(unit.max_health, Some(100.0));
    }

    #[test]
    fn test_health_ratio_fallback() {
        let mut summon = Unit::summon(UnitId(2), "Pathak", Side::Player, 0, 5.0, 1.0, 15.0);
        assert_eq!(summon.kind, TroopKind::Air);
        assert_eq!(summon.health_ratio(100.0), 0.01);
        summon.take_damage(5.0);
        assert_eq!(summon.health_ratio(100.0), 0.0);
    }

    #[test]
    fn test_modifier_applies_and_reverts() {
        let mut unit = Unit::from_template(UnitId(1), &brute(), Side::Player, 0, 0.0, 100.0);
        unit.apply_modifier(Modifier::from_percent(0.5, 1.0, 1000.0));
        assert_eq!(unit.attack, Some(45.0));
        assert_eq!(unit.health, 300.0);

        assert_eq!(unit.tick_modifiers(999.0), 0);
        assert_eq!(unit.tick_modifiers(1.0), 1);
        assert_eq!(unit.attack, Some(30.0));
        assert_eq!(unit.health, 150.0);
        assert!(unit.modifiers.is_empty());
    }

    #[test]
    fn test_scaling_absent_stats() {
        let card = CardTemplate::new("wall", "Wall", 4, TroopKind::Building).with_health(150.0);
        let mut unit = Unit::from_template(UnitId(1), &card, Side::Ai, 0, 19.0, 100.0);
        unit.scale_attack(0.7);
        unit.scale_speed(0.7);
        assert!(unit.attack.is_none());
        assert!(unit.speed.is_none());
    }

    #[test]
    fn test_tower_hit_uses_attack_or_default() {
        let mut unit = Unit::from_template(UnitId(1), &brute(), Side::Player, 0, 0.0, 100.0);
        assert_eq!(unit.tower_hit(20.0), 30.0);
        unit.scale_attack(0.5);
        assert_eq!(unit.tower_hit(20.0), 15.0);
        unit.attack = None;
        assert_eq!(unit.tower_hit(20.0), 20.0);
    }
}
