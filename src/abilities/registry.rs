//! Ability registry.
//!
//! Maps ability identifiers to builders that bind a unit's parameter bag
//! into a typed [`Ability`]. Binding happens when the death pass reaches a
//! unit, so a card with broken parameters fails only for that unit and
//! only at that moment.

use rustc_hash::FxHashMap;

use super::ability::{Ability, AbilityId};
use crate::cards::{keys, Attributes};
use crate::core::AbilityError;

/// Binds parameters for one ability identifier.
pub type AbilityBuilder = fn(&AbilityId, &Attributes) -> Result<Ability, AbilityError>;

/// Identifiers of the shipped abilities.
pub mod names {
    pub const NEIL_DEATH_SWORD: &str = "neil_death_sword";
    pub const UDAY_LANE_ARROW: &str = "uday_lane_arrow";
    pub const CHAHAK_EXPLOSION: &str = "chahak_explosion";
    pub const NAYSHA_POISON_PATH: &str = "naysha_poison_path";
    pub const SHUBHAN_ROLL: &str = "shubhan_roll";
    pub const AAYANSH_DEATH_BUFF: &str = "aayansh_death_buff";
    pub const ADYA_COAL_BARRIER: &str = "adya_coal_barrier";
    pub const NOEL_SUMMON: &str = "noel_summon";
    pub const NOEL_SUMMON_NERF: &str = "noel_summon_nerf";
    pub const RISHET_STEAL: &str = "rishet_steal";
    pub const ADVIK_BRIDGE_BLOCK: &str = "advik_bridge_block";
}

/// Lookup from ability identifier to parameter binder.
///
/// ```
/// use lane_war::abilities::{Ability, AbilityId, AbilityRegistry};
/// use lane_war::cards::Attributes;
///
/// let registry = AbilityRegistry::standard();
/// let params = Attributes::new().with("death_damage", 50.0);
/// let ability = registry.resolve(&AbilityId::new("neil_death_sword"), &params).unwrap();
/// assert_eq!(ability, Some(Ability::HighestHealthStrike { damage: 50.0 }));
///
/// // Unregistered identifiers mean "no death effect".
/// let none = registry.resolve(&AbilityId::new("catapult_fire"), &params).unwrap();
/// assert!(none.is_none());
/// ```
#[derive(Clone, Default)]
pub struct AbilityRegistry {
    builders: FxHashMap<AbilityId, AbilityBuilder>,
}

impl AbilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every shipped ability.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(names::NEIL_DEATH_SWORD, bind_highest_health_strike);
        registry.register(names::UDAY_LANE_ARROW, bind_lane_arrow);
        registry.register(names::CHAHAK_EXPLOSION, bind_explosion);
        registry.register(names::NAYSHA_POISON_PATH, bind_poison_zone);
        registry.register(names::SHUBHAN_ROLL, bind_roll);
        registry.register(names::AAYANSH_DEATH_BUFF, bind_death_buff);
        registry.register(names::ADYA_COAL_BARRIER, bind_coal_barrier);
        registry.register(names::NOEL_SUMMON, bind_summon);
        registry.register(names::NOEL_SUMMON_NERF, bind_debuff);
        registry.register(names::RISHET_STEAL, bind_steal);
        registry.register(names::ADVIK_BRIDGE_BLOCK, bind_bridge_block);
        registry
    }

    /// Register a builder. A second registration replaces the first.
    pub fn register(&mut self, id: impl Into<AbilityId>, builder: AbilityBuilder) {
        self.builders.insert(id.into(), builder);
    }

    /// Whether an identifier has a builder.
    #[must_use]
    pub fn contains(&self, id: &AbilityId) -> bool {
        self.builders.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Bind an identifier and parameters into an ability.
    ///
    /// Returns `Ok(None)` for identifiers with no builder.
    pub fn resolve(&self, id: &AbilityId, params: &Attributes) -> Result<Option<Ability>, AbilityError> {
        match self.builders.get(id) {
            Some(builder) => builder(id, params).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for AbilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.builders.keys().map(AbilityId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("AbilityRegistry").field("abilities", &ids).finish()
    }
}

// === Parameter helpers ===

fn required(id: &AbilityId, params: &Attributes, key: &'static str) -> Result<f64, AbilityError> {
    params.float(key).ok_or_else(|| AbilityError::MissingParameter {
        ability: id.clone(),
        key,
    })
}

fn invalid(id: &AbilityId, key: &'static str, reason: impl Into<String>) -> AbilityError {
    AbilityError::InvalidParameter {
        ability: id.clone(),
        key,
        reason: reason.into(),
    }
}

fn non_negative(id: &AbilityId, key: &'static str, value: f64) -> Result<f64, AbilityError> {
    if value.is_nan() || value < 0.0 {
        return Err(invalid(id, key, format!("must be non-negative, got {value}")));
    }
    Ok(value)
}

fn fraction(id: &AbilityId, key: &'static str, value: f64) -> Result<f64, AbilityError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(id, key, format!("must be within [0, 1], got {value}")));
    }
    Ok(value)
}

fn whole(id: &AbilityId, params: &Attributes, key: &'static str, default: u32) -> Result<u32, AbilityError> {
    match params.int(key) {
        Some(v) => u32::try_from(v).map_err(|_| invalid(id, key, format!("must be a non-negative count, got {v}"))),
        None if params.contains(key) => Err(invalid(id, key, "must be a whole number")),
        None => Ok(default),
    }
}

// === Builders ===

fn bind_highest_health_strike(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    let damage = non_negative(id, keys::DEATH_DAMAGE, required(id, params, keys::DEATH_DAMAGE)?)?;
    Ok(Ability::HighestHealthStrike { damage })
}

fn bind_lane_arrow(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::LaneArrow {
        lane_damage: non_negative(id, keys::DEATH_LANE_DAMAGE, required(id, params, keys::DEATH_LANE_DAMAGE)?)?,
        tower_damage: non_negative(id, keys::DEATH_TOWER_DAMAGE, required(id, params, keys::DEATH_TOWER_DAMAGE)?)?,
    })
}

fn bind_explosion(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::Explosion {
        range: non_negative(id, keys::RANGE, required(id, params, keys::RANGE)?)?,
        ally_damage_percent: fraction(
            id,
            keys::ALLY_SELF_DAMAGE_PERCENT,
            required(id, params, keys::ALLY_SELF_DAMAGE_PERCENT)?,
        )?,
    })
}

fn bind_poison_zone(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    let duration_ms = params.float(keys::ZONE_DURATION).unwrap_or(8000.0);
    Ok(Ability::PoisonZone {
        damage_per_second: non_negative(
            id,
            keys::ZONE_DAMAGE_PER_SECOND,
            required(id, params, keys::ZONE_DAMAGE_PER_SECOND)?,
        )?,
        radius: non_negative(id, keys::ZONE_RADIUS, required(id, params, keys::ZONE_RADIUS)?)?,
        duration_ms: non_negative(id, keys::ZONE_DURATION, duration_ms)?,
    })
}

fn bind_roll(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    let range = params.float(keys::RANGE).unwrap_or(1.0);
    Ok(Ability::Roll {
        range: non_negative(id, keys::RANGE, range)?,
    })
}

fn bind_death_buff(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::DeathBuff {
        attack_percent: non_negative(
            id,
            keys::BUFF_ATTACK_PERCENT,
            required(id, params, keys::BUFF_ATTACK_PERCENT)?,
        )?,
        health_percent: non_negative(
            id,
            keys::BUFF_HEALTH_PERCENT,
            required(id, params, keys::BUFF_HEALTH_PERCENT)?,
        )?,
        duration_ms: non_negative(id, keys::BUFF_DURATION, required(id, params, keys::BUFF_DURATION)?)?,
    })
}

fn bind_coal_barrier(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::CoalBarrier {
        radius: non_negative(id, keys::ZONE_RADIUS, params.float(keys::ZONE_RADIUS).unwrap_or(1.0))?,
        duration_ms: non_negative(id, keys::ZONE_DURATION, params.float(keys::ZONE_DURATION).unwrap_or(15_000.0))?,
    })
}

fn bind_bridge_block(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::BridgeBlock {
        radius: non_negative(id, keys::ZONE_RADIUS, params.float(keys::ZONE_RADIUS).unwrap_or(1.0))?,
        duration_ms: non_negative(id, keys::ZONE_DURATION, params.float(keys::ZONE_DURATION).unwrap_or(20_000.0))?,
    })
}

fn bind_summon(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    Ok(Ability::Summon {
        count: whole(id, params, keys::SUMMON_COUNT, 3)?,
        health: non_negative(id, keys::SUMMON_HEALTH, params.float(keys::SUMMON_HEALTH).unwrap_or(1.0))?,
        attack: non_negative(id, keys::SUMMON_DAMAGE, params.float(keys::SUMMON_DAMAGE).unwrap_or(15.0))?,
    })
}

fn bind_debuff(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    let percent = fraction(id, keys::NERF_PERCENT, required(id, params, keys::NERF_PERCENT)?)?;
    Ok(Ability::Debuff { percent })
}

fn bind_steal(id: &AbilityId, params: &Attributes) -> Result<Ability, AbilityError> {
    let min = whole(id, params, keys::STEAL_MIN, 2)?;
    let max = whole(id, params, keys::STEAL_MAX, 3)?;
    if min > max {
        return Err(invalid(id, keys::STEAL_MIN, format!("{min} exceeds {} ({max})", keys::STEAL_MAX)));
    }
    Ok(Ability::Steal { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str, params: &Attributes) -> Result<Option<Ability>, AbilityError> {
        AbilityRegistry::standard().resolve(&AbilityId::new(name), params)
    }

    #[test]
    fn test_standard_registry() {
        let registry = AbilityRegistry::standard();
        assert_eq!(registry.len(), 11);
        assert!(registry.contains(&AbilityId::new(names::RISHET_STEAL)));
        assert!(!registry.contains(&AbilityId::new("iron_wall_block")));
    }

    #[test]
    fn test_missing_parameter() {
        let err = resolve(names::NEIL_DEATH_SWORD, &Attributes::new()).unwrap_err();
        assert_eq!(
            err,
            AbilityError::MissingParameter {
                ability: AbilityId::new(names::NEIL_DEATH_SWORD),
                key: keys::DEATH_DAMAGE,
            }
        );
    }

    #[test]
    fn test_poison_duration_default() {
        let params = Attributes::new()
            .with(keys::ZONE_DAMAGE_PER_SECOND, 3.0)
            .with(keys::ZONE_RADIUS, 2.0);
        assert_eq!(
            resolve(names::NAYSHA_POISON_PATH, &params).unwrap(),
            Some(Ability::PoisonZone {
                damage_per_second: 3.0,
                radius: 2.0,
                duration_ms: 8000.0
            })
        );
    }

    #[test]
    fn test_steal_bounds_validated() {
        let params = Attributes::new()
            .with(keys::STEAL_MIN, 4_i64)
            .with(keys::STEAL_MAX, 3_i64);
        assert!(matches!(
            resolve(names::RISHET_STEAL, &params),
            Err(AbilityError::InvalidParameter { key: keys::STEAL_MIN, .. })
        ));

        let negative = Attributes::new().with(keys::STEAL_MIN, -1_i64);
        assert!(resolve(names::RISHET_STEAL, &negative).is_err());

        assert_eq!(
            resolve(names::RISHET_STEAL, &Attributes::new()).unwrap(),
            Some(Ability::Steal { min: 2, max: 3 })
        );
    }

    #[test]
    fn test_fraction_out_of_range() {
        let params = Attributes::new().with(keys::NERF_PERCENT, 1.5);
        assert!(resolve(names::NOEL_SUMMON_NERF, &params).is_err());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let params = Attributes::new()
            .with(keys::ZONE_DAMAGE_PER_SECOND, 3.0)
            .with(keys::ZONE_RADIUS, -2.0);
        assert!(resolve(names::NAYSHA_POISON_PATH, &params).is_err());
    }

    #[test]
    fn test_fractional_count_rejected() {
        let params = Attributes::new().with(keys::SUMMON_COUNT, 2.5);
        assert!(resolve(names::NOEL_SUMMON, &params).is_err());
    }
}
