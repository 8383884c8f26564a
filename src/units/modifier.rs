//! Expiring stat modifiers.
//!
//! A modifier multiplies a unit's attack and current health when applied
//! and divides them back out when its duration runs out. Modifiers live on
//! the unit they affect and are counted down by the effect pass on the
//! simulation clock, so they disappear together with their unit and can
//! never revert a stat on a unit that no longer exists.

use serde::{Deserialize, Serialize};

/// A temporary multiplicative change to attack and health.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    /// Multiplier applied to attack.
    pub attack_factor: f64,
    /// Multiplier applied to current health.
    pub health_factor: f64,
    /// Time left before the modifier is reverted, in milliseconds.
    pub remaining_ms: f64,
}

impl Modifier {
    /// Create a modifier from percentage bonuses (0.3 means +30%).
    #[must_use]
    pub fn from_percent(attack_percent: f64, health_percent: f64, duration_ms: f64) -> Self {
        Self {
            attack_factor: 1.0 + attack_percent,
            health_factor: 1.0 + health_percent,
            remaining_ms: duration_ms,
        }
    }

    /// Count down by `elapsed_ms`. Returns true once the modifier has expired.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        self.remaining_ms = (self.remaining_ms - elapsed_ms).max(0.0);
        self.remaining_ms <= 0.0
    }
}
