//! Resource economy.
//!
//! Each side gains one unit of resource every `resource_interval_ms` of
//! simulated time, up to the cap. The clock keeps the leftover time between
//! ticks so frame rate never changes the income.

use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, Side, World};

/// Fixed-interval income accumulator shared by both sides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceClock {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl ResourceClock {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.resource_interval_ms)
    }

    /// Time carried toward the next income step.
    #[must_use]
    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Advance by `delta_ms` and pay out every completed interval.
    ///
    /// Returns the number of intervals completed. Non-finite or
    /// non-positive deltas are ignored.
    pub fn tick(&mut self, world: &mut World, delta_ms: f64) -> u32 {
        if self.interval_ms <= 0.0 || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return 0;
        }
        self.accumulated_ms += delta_ms;

        // Float to int `as` saturates, so a huge delta caps at u32::MAX steps.
        let steps = (self.accumulated_ms / self.interval_ms).floor() as u32;
        self.accumulated_ms %= self.interval_ms;

        if steps > 0 {
            let cap = world.resource_cap();
            for side in Side::ALL {
                world.side_mut(side).credit(steps, cap);
            }
            log::trace!(
                "economy: +{} (player {}, ai {})",
                steps,
                world.balance(Side::Player),
                world.balance(Side::Ai)
            );
        }
        steps
    }
}

/// Debit `amount` from `side` if it can afford it.
pub fn try_spend(world: &mut World, side: Side, amount: u32) -> bool {
    world.side_mut(side).try_spend(amount)
}
