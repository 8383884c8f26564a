//! Opponent policy trait and the decisions it reports.
//!
//! A policy reads the post-tick world and deploys through
//! [`World::deploy`], the same entry point the human side uses. It never
//! holds on to the world between decisions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{GameRng, Side, UnitId, World};

/// Which branch of a policy produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Balance below the minimum; nothing considered.
    Idle,
    /// A lane's threat crossed the threshold.
    EmergencyDefense,
    /// Behind on tower health with enough resource to push.
    LosingPush,
    /// Enough resource for a multi-card combo.
    Combo,
    /// Fallback single-card play.
    BasicPlay,
}

/// Outcome of one policy invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub rule: Rule,
    /// Lane the decision targeted, if it got that far.
    pub lane: Option<usize>,
    /// Cards actually deployed, in order.
    pub deployed: SmallVec<[(CardId, UnitId); 3]>,
}

impl Decision {
    /// A decision that did nothing.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            rule: Rule::Idle,
            lane: None,
            deployed: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn new(rule: Rule, lane: usize) -> Self {
        Self {
            rule,
            lane: Some(lane),
            deployed: SmallVec::new(),
        }
    }

    /// Whether anything was deployed.
    #[must_use]
    pub fn deployed_any(&self) -> bool {
        !self.deployed.is_empty()
    }
}

/// Decision procedure for the scripted side.
pub trait OpponentPolicy: Send + Sync {
    /// Inspect the world and deploy for `side`.
    fn decide(&mut self, world: &mut World, side: Side, rng: &mut GameRng) -> Decision;
}

/// Policy that never deploys.
#[derive(Clone, Debug, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn decide(&mut self, _world: &mut World, _side: Side, _rng: &mut GameRng) -> Decision {
        Decision::idle()
    }
}
