//! Match configuration.
//!
//! The core never hardcodes arena or economy constants. A host builds a
//! `MatchConfig` (usually starting from `MatchConfig::default()`, which
//! carries the shipped tuning) and hands it to the match at creation.
//!
//! Both config types are serde-deserializable so they can be supplied as
//! data alongside the card tables.

use serde::{Deserialize, Serialize};

/// Tuning for the scripted opponent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Time between decisions, in milliseconds.
    pub decision_interval_ms: f64,

    /// Below this balance the AI does nothing at all.
    pub min_balance: u32,

    /// Summed opposing health in one lane above which the AI defends it.
    pub threat_threshold: f64,

    /// Balance required for a push while losing on tower health.
    pub push_threshold: u32,

    /// Balance required for a multi-card combo.
    pub combo_threshold: u32,

    /// How many times per match the resource-steal card may be played.
    pub steal_card_uses: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            decision_interval_ms: 2000.0,
            min_balance: 2,
            threat_threshold: 200.0,
            push_threshold: 4,
            combo_threshold: 7,
            steal_card_uses: 2,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of parallel lanes.
    pub lanes: usize,

    /// Logical length of every lane. Positions live in `[0, lane_length]`.
    pub lane_length: f64,

    /// Bridge position as a fraction of the lane length.
    pub bridge_ratio: f64,

    /// Tower health before class bonuses.
    pub base_tower_health: f64,

    /// Number of extra classes contributing bonus tower health.
    pub extra_classes: u32,

    /// Tower health granted per extra class.
    pub health_per_extra_class: f64,

    /// Balance each side starts with.
    pub starting_resource: u32,

    /// Upper bound on each side's balance.
    pub resource_cap: u32,

    /// Time needed to earn one resource, in milliseconds.
    pub resource_interval_ms: f64,

    /// Per-tick multiplier applied to unit speed.
    pub movement_scale: f64,

    /// Units strictly closer than this fight each other.
    pub melee_range: f64,

    /// Health given to units whose card specifies none.
    pub default_unit_health: f64,

    /// Tower damage dealt by units with neither tower damage nor attack.
    pub default_tower_hit: f64,

    /// Match length in milliseconds.
    pub match_duration_ms: f64,

    /// Scripted opponent tuning.
    pub ai: AiConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            lanes: 2,
            lane_length: 20.0,
            bridge_ratio: 0.5,
            base_tower_health: 1500.0,
            extra_classes: 3,
            health_per_extra_class: 100.0,
            starting_resource: 15,
            resource_cap: 20,
            resource_interval_ms: 3000.0,
            movement_scale: 0.02,
            melee_range: 1.0,
            default_unit_health: 100.0,
            default_tower_hit: 20.0,
            match_duration_ms: 300_000.0,
            ai: AiConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Starting tower health including class bonuses.
    #[must_use]
    pub fn tower_health(&self) -> f64 {
        self.base_tower_health + f64::from(self.extra_classes) * self.health_per_extra_class
    }

    /// Absolute bridge position on every lane.
    #[must_use]
    pub fn bridge_position(&self) -> f64 {
        self.lane_length * self.bridge_ratio
    }

    /// Set the number of lanes.
    #[must_use]
    pub fn with_lanes(mut self, lanes: usize) -> Self {
        assert!(lanes > 0, "Must have at least 1 lane");
        self.lanes = lanes;
        self
    }

    /// Set the lane length.
    #[must_use]
    pub fn with_lane_length(mut self, length: f64) -> Self {
        assert!(length > 0.0, "Lane length must be positive");
        self.lane_length = length;
        self
    }

    /// Set the starting balance for both sides.
    #[must_use]
    pub fn with_starting_resource(mut self, amount: u32) -> Self {
        self.starting_resource = amount;
        self
    }

    /// Set the balance cap.
    #[must_use]
    pub fn with_resource_cap(mut self, cap: u32) -> Self {
        self.resource_cap = cap;
        self
    }

    /// Set the base tower health and drop class bonuses.
    #[must_use]
    pub fn with_tower_health(mut self, health: f64) -> Self {
        self.base_tower_health = health;
        self.extra_classes = 0;
        self
    }

    /// Set the match duration.
    #[must_use]
    pub fn with_match_duration(mut self, duration_ms: f64) -> Self {
        self.match_duration_ms = duration_ms;
        self
    }

    /// Replace the AI tuning.
    #[must_use]
    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

/// Convert a raw card speed (authored around 40-50) into lane units per tick before scaling.
#[must_use]
pub fn normalize_speed(raw: f64) -> f64 {
    raw / 50.0
}
