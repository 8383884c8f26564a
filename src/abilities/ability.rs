//! Ability identifiers and the closed set of bound abilities.

use serde::{Deserialize, Serialize};

/// String key naming a unit's death ability in card data.
///
/// An identifier with no registered builder is legal and means the unit
/// has no death effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbilityId(String);

impl AbilityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AbilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AbilityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A death ability with its parameters already read and validated.
///
/// Produced by [`AbilityRegistry::resolve`](super::AbilityRegistry::resolve)
/// from a unit's ability id and parameter bag. Every variant has exactly one
/// handler in [`handlers`](super::handlers).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ability {
    /// The ground enemy with the most health takes `damage`.
    HighestHealthStrike { damage: f64 },

    /// Every enemy in the dying unit's lane takes `lane_damage`; the enemy
    /// tower takes `tower_damage`.
    LaneArrow { lane_damage: f64, tower_damage: f64 },

    /// Enemies within `range` are killed outright; allies within `range`
    /// lose `ally_damage_percent` of their current health.
    Explosion { range: f64, ally_damage_percent: f64 },

    /// Leaves a poison zone at the death position.
    PoisonZone {
        damage_per_second: f64,
        radius: f64,
        duration_ms: f64,
    },

    /// Enemies closer than `range` take the dying unit's attack.
    Roll { range: f64 },

    /// All allies get an expiring attack and health modifier.
    DeathBuff {
        attack_percent: f64,
        health_percent: f64,
        duration_ms: f64,
    },

    /// Inert coal barrier at the death position.
    CoalBarrier { radius: f64, duration_ms: f64 },

    /// Inert barrier on the bridge of the dying unit's lane.
    BridgeBlock { radius: f64, duration_ms: f64 },

    /// Spawns `count` fliers at the death position.
    Summon { count: u32, health: f64, attack: f64 },

    /// Permanently scales every enemy's speed and attack by `1 - percent`.
    Debuff { percent: f64 },

    /// Moves `min..=max` resource (bounded by the enemy's balance) from the
    /// enemy to the dying unit's side.
    Steal { min: u32, max: u32 },
}

impl Ability {
    /// Short name for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Ability::HighestHealthStrike { .. } => "highest-health strike",
            Ability::LaneArrow { .. } => "lane arrow",
            Ability::Explosion { .. } => "explosion",
            Ability::PoisonZone { .. } => "poison zone",
            Ability::Roll { .. } => "roll",
            Ability::DeathBuff { .. } => "death buff",
            Ability::CoalBarrier { .. } => "coal barrier",
            Ability::BridgeBlock { .. } => "bridge block",
            Ability::Summon { .. } => "summon",
            Ability::Debuff { .. } => "debuff",
            Ability::Steal { .. } => "steal",
        }
    }
}
