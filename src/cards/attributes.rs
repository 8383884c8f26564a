//! Role-specific card parameters.
//!
//! Base stats (cost, health, speed, attack) are typed fields on
//! `CardTemplate`. Everything an individual ability or role needs beyond
//! that lives in an `Attributes` bag keyed by name, so new abilities can
//! read new tunables without touching the unit layout.
//!
//! Well-known keys are collected in [`keys`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Well-known parameter keys used by the shipped abilities.
pub mod keys {
    pub const RANGE: &str = "range";
    pub const DEATH_DAMAGE: &str = "death_damage";
    pub const DEATH_LANE_DAMAGE: &str = "death_lane_damage";
    pub const DEATH_TOWER_DAMAGE: &str = "death_tower_damage";
    pub const ALLY_SELF_DAMAGE_PERCENT: &str = "ally_self_damage_percent";
    pub const ZONE_DAMAGE_PER_SECOND: &str = "death_zone_damage";
    pub const ZONE_RADIUS: &str = "death_zone_radius";
    pub const ZONE_DURATION: &str = "death_zone_duration";
    pub const BUFF_ATTACK_PERCENT: &str = "death_buff_attack_percent";
    pub const BUFF_HEALTH_PERCENT: &str = "death_buff_health_percent";
    pub const BUFF_DURATION: &str = "death_buff_duration";
    pub const SUMMON_COUNT: &str = "summon_count";
    pub const SUMMON_HEALTH: &str = "summon_health";
    pub const SUMMON_DAMAGE: &str = "summon_damage";
    pub const NERF_PERCENT: &str = "death_nerf_percent";
    pub const STEAL_MIN: &str = "steal_min";
    pub const STEAL_MAX: &str = "steal_max";
    pub const USES_LIMIT: &str = "uses_limit";
    pub const MAGIC_DAMAGE: &str = "magic_damage";
    pub const MAGIC_RANGE: &str = "magic_range";
    pub const POISON_PER_SECOND: &str = "poison_per_second";
    pub const INTERVAL: &str = "interval";
    pub const DURATION: &str = "duration";
    pub const TARGET_PRIORITY: &str = "target_priority";
    pub const ROLE: &str = "role";
}

/// Value for a card parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Whole number (counts, durations in ms).
    Int(i64),
    /// Real number (damage, radii, percentages).
    Float(f64),
    /// Text value (roles, priorities).
    Text(String),
}

impl AttributeValue {
    /// Read as a real number. Integers widen.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            AttributeValue::Int(v) => Some(*v as f64),
            AttributeValue::Text(_) => None,
        }
    }

    /// Read as an integer. Floats are accepted only when integral.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            AttributeValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    /// Read as text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Parameter bag carried by card templates and the units spawned from them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    values: FxHashMap<String, AttributeValue>,
}

impl Attributes {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Insert a value (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Real-valued lookup.
    #[must_use]
    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_float)
    }

    /// Integer lookup.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AttributeValue::as_int)
    }

    /// Text lookup.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_text)
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
