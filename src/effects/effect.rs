//! Active area effects.
//!
//! Effects are created by ability handlers, owned by the world, and only
//! ever mutated by the effect pass. Their duration never increases; an
//! effect is dropped in the same pass its duration reaches zero.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Inert marker kinds with no gameplay interaction yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarrierKind {
    /// Left behind by the furnace flier.
    Coal,
    /// Placed on the bridge by the underground runner.
    Bridge,
}

/// What an effect does while it lasts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Damages opposing units in range in proportion to elapsed time.
    Poison { damage_per_second: f64 },
    /// Duration-tracked marker. Extension point for blocking rules.
    Barrier(BarrierKind),
}

/// A duration-bound area phenomenon anchored on one lane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub owner: Side,
    pub lane: usize,
    pub position: f64,
    pub radius: f64,
    /// Remaining lifetime in milliseconds, never negative.
    pub duration_ms: f64,
}

impl Effect {
    /// A damage-over-time zone.
    #[must_use]
    pub fn poison(owner: Side, lane: usize, position: f64, radius: f64, damage_per_second: f64, duration_ms: f64) -> Self {
        Self {
            kind: EffectKind::Poison { damage_per_second },
            owner,
            lane,
            position,
            radius,
            duration_ms,
        }
    }

    /// An inert barrier marker.
    #[must_use]
    pub fn barrier(kind: BarrierKind, owner: Side, lane: usize, position: f64, radius: f64, duration_ms: f64) -> Self {
        Self {
            kind: EffectKind::Barrier(kind),
            owner,
            lane,
            position,
            radius,
            duration_ms,
        }
    }

    /// Whether a unit of `side` at (`lane`, `position`) is an opposing unit inside the area.
    #[must_use]
    pub fn covers_enemy(&self, side: Side, lane: usize, position: f64) -> bool {
        side != self.owner && lane == self.lane && (position - self.position).abs() <= self.radius
    }

    /// Whether the duration has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.duration_ms <= 0.0
    }
}
