//! Decision cadence.

use super::policy::{Decision, OpponentPolicy};
use crate::core::{GameRng, Side, World};

/// Runs a policy for one side every `interval_ms` of simulated time.
///
/// Time since the last decision resets to zero whenever the policy runs;
/// leftover time is not carried into the next interval.
#[derive(Clone, Debug)]
pub struct AiController<P> {
    policy: P,
    side: Side,
    interval_ms: f64,
    since_last_ms: f64,
}

impl<P: OpponentPolicy> AiController<P> {
    #[must_use]
    pub fn new(policy: P, side: Side, interval_ms: f64) -> Self {
        Self {
            policy,
            side,
            interval_ms,
            since_last_ms: 0.0,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Advance the cadence; run the policy if an interval has passed.
    pub fn update(&mut self, world: &mut World, delta_ms: f64, rng: &mut GameRng) -> Option<Decision> {
        self.since_last_ms += delta_ms;
        if self.since_last_ms < self.interval_ms {
            return None;
        }
        self.since_last_ms = 0.0;
        Some(self.policy.decide(world, self.side, rng))
    }
}
