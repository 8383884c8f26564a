//! Sides and per-side data storage.
//!
//! ## Side
//!
//! A match always has exactly two sides: the human-controlled `Player` side,
//! which deploys at lane position 0 and pushes toward the far end, and the
//! scripted `Ai` side, which deploys at the far end and pushes toward 0.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled side. Spawns at position 0.
    Player,
    /// Scripted opponent. Spawns at the far end of the lane.
    Ai,
}

impl Side {
    /// Both sides in a fixed order (player first).
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Slot index (0 for player, 1 for AI).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }

    /// Sign of movement along the lane: +1 toward the AI tower, -1 toward the player tower.
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Side::Player => 1.0,
            Side::Ai => -1.0,
        }
    }

    /// Position where this side's deployments appear.
    ///
    /// ```
    /// use lane_war::core::Side;
    ///
    /// assert_eq!(Side::Player.spawn_position(20.0), 0.0);
    /// assert_eq!(Side::Ai.spawn_position(20.0), 19.0);
    /// ```
    #[must_use]
    pub fn spawn_position(self, lane_length: f64) -> f64 {
        match self {
            Side::Player => 0.0,
            Side::Ai => (lane_length - 1.0).max(0.0),
        }
    }

    /// Whether a unit of this side at `position` has reached the enemy tower.
    #[must_use]
    pub fn reached_enemy_tower(self, position: f64, lane_length: f64) -> bool {
        match self {
            Side::Player => position >= lane_length,
            Side::Ai => position <= 0.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use lane_war::core::{Side, SideMap};
///
/// let mut towers = SideMap::with_value(1800.0);
/// towers[Side::Ai] -= 20.0;
/// assert_eq!(towers[Side::Player], 1800.0);
/// assert_eq!(towers[Side::Ai], 1780.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Ai)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Mutable references to both sides at once, in `(side, other)` order.
    pub fn pair_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [player, ai] = &mut self.data;
        match side {
            Side::Player => (player, ai),
            Side::Ai => (ai, player),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
