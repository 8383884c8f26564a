//! World state: the single mutable aggregate of a match.
//!
//! ## World
//!
//! - Units and active effects (persistent `im` vectors, so a snapshot is an
//!   O(1) clone)
//! - Per-side balance and tower
//! - Elapsed time and arena geometry
//!
//! The world is owned by the match. Systems, ability handlers and the AI
//! receive it by reference for the duration of one call; none of them keep
//! it.
//!
//! ## WorldSnapshot
//!
//! Read-only copy handed to the renderer once per tick.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::entity::UnitId;
use super::error::DeployError;
use super::player::{Side, SideMap};
use crate::cards::CardTemplate;
use crate::effects::Effect;
use crate::rules::MatchOutcome;
use crate::units::Unit;

/// A side's win-condition structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    /// May dip below zero within the tick that destroys the tower.
    pub health: f64,
}

impl Tower {
    /// Subtract health.
    pub fn damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Health at or below zero.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    /// Floor health at zero.
    pub fn clamp(&mut self) {
        self.health = self.health.max(0.0);
    }
}

/// Per-side resource balance and tower.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideState {
    /// Kept within `[0, resource_cap]`.
    pub balance: u32,
    pub tower: Tower,
}

impl SideState {
    /// Debit `amount` if affordable. Returns whether the debit happened.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Add up to `amount` without exceeding `cap`. Returns the amount actually added.
    pub fn credit(&mut self, amount: u32, cap: u32) -> u32 {
        let added = amount.min(cap.saturating_sub(self.balance));
        self.balance += added;
        added
    }

    /// Remove up to `amount`, never going below zero. Returns the amount removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.balance);
        self.balance -= taken;
        taken
    }
}

/// Mutable match world.
#[derive(Clone, Debug)]
pub struct World {
    units: Vector<Unit>,
    effects: Vector<Effect>,
    sides: SideMap<SideState>,
    elapsed_ms: f64,
    lanes: usize,
    lane_length: f64,
    bridge_position: f64,
    resource_cap: u32,
    default_unit_health: f64,
    next_unit_id: UnitId,
}

impl World {
    /// Create the starting world for a match.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        let starting = SideState {
            balance: config.starting_resource.min(config.resource_cap),
            tower: Tower {
                health: config.tower_health(),
            },
        };
        Self {
            units: Vector::new(),
            effects: Vector::new(),
            sides: SideMap::with_value(starting),
            elapsed_ms: 0.0,
            lanes: config.lanes,
            lane_length: config.lane_length,
            bridge_position: config.bridge_position(),
            resource_cap: config.resource_cap,
            default_unit_health: config.default_unit_health,
            next_unit_id: UnitId::new(0),
        }
    }

    // === Geometry and clock ===

    #[must_use]
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    #[must_use]
    pub fn lane_length(&self) -> f64 {
        self.lane_length
    }

    #[must_use]
    pub fn bridge_position(&self) -> f64 {
        self.bridge_position
    }

    #[must_use]
    pub fn resource_cap(&self) -> u32 {
        self.resource_cap
    }

    /// Health given to units spawned without one.
    #[must_use]
    pub fn default_unit_health(&self) -> f64 {
        self.default_unit_health
    }

    /// Simulated time since the match started.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Advance the match clock.
    pub fn advance_clock(&mut self, delta_ms: f64) {
        self.elapsed_ms += delta_ms;
    }

    // === Sides ===

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side]
    }

    /// Both sides at once.
    pub fn sides_mut(&mut self) -> &mut SideMap<SideState> {
        &mut self.sides
    }

    #[must_use]
    pub fn balance(&self, side: Side) -> u32 {
        self.sides[side].balance
    }

    #[must_use]
    pub fn tower_health(&self, side: Side) -> f64 {
        self.sides[side].tower.health
    }

    // === Units ===

    /// All units, dead-but-unpruned ones included.
    #[must_use]
    pub fn units(&self) -> &Vector<Unit> {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut Vector<Unit> {
        &mut self.units
    }

    /// Look up a unit by ID.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Look up a unit by ID for mutation.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Reserve the next unit ID.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        let id = self.next_unit_id;
        self.next_unit_id = id.next();
        id
    }

    /// Place an already-built unit on the field.
    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push_back(unit);
    }

    /// Living units of one side.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.side == side && u.is_alive())
    }

    /// Remove every unit the death pass has handled or whose health is gone.
    ///
    /// Returns the number of units removed.
    pub fn prune_dead(&mut self) -> usize {
        let before = self.units.len();
        self.units.retain(|u| !u.death_processed && !u.is_dead());
        before - self.units.len()
    }

    // === Effects ===

    #[must_use]
    pub fn effects(&self) -> &Vector<Effect> {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut Vector<Effect> {
        &mut self.effects
    }

    pub fn add_effect(&mut self, effect: Effect) {
        self.effects.push_back(effect);
    }

    // === Deploy ===

    /// Check a lane index against the arena.
    pub fn check_lane(&self, lane: usize) -> Result<(), DeployError> {
        if lane >= self.lanes {
            return Err(DeployError::InvalidLane {
                lane,
                lanes: self.lanes,
            });
        }
        Ok(())
    }

    /// Pay for and spawn a unit at `side`'s spawn edge of `lane`.
    ///
    /// This is the single entry point for both the human side and the AI.
    pub fn deploy(&mut self, template: &CardTemplate, side: Side, lane: usize) -> Result<UnitId, DeployError> {
        self.check_lane(lane)?;

        let available = self.sides[side].balance;
        if !self.sides[side].try_spend(template.cost) {
            return Err(DeployError::InsufficientResource {
                needed: template.cost,
                available,
            });
        }

        let id = self.alloc_unit_id();
        let position = side.spawn_position(self.lane_length);
        let unit = Unit::from_template(id, template, side, lane, position, self.default_unit_health);
        self.add_unit(unit);

        log::debug!(
            "{} deployed {} as {} in lane {} (balance {})",
            side,
            template.id,
            id,
            lane,
            self.sides[side].balance
        );
        Ok(id)
    }

    // === Snapshot ===

    /// Read-only copy for rendering.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            units: self.units.clone(),
            effects: self.effects.clone(),
            balances: SideMap::new(|s| self.sides[s].balance),
            tower_health: SideMap::new(|s| self.sides[s].tower.health),
            elapsed_ms: self.elapsed_ms,
            lanes: self.lanes,
            lane_length: self.lane_length,
            outcome: None,
        }
    }
}

/// Read-only view of the world after a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub units: Vector<Unit>,
    pub effects: Vector<Effect>,
    pub balances: SideMap<u32>,
    pub tower_health: SideMap<f64>,
    pub elapsed_ms: f64,
    pub lanes: usize,
    pub lane_length: f64,
    pub outcome: Option<MatchOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TroopKind;

    fn card(cost: u32) -> CardTemplate {
        CardTemplate::new("grunt", "Grunt", cost, TroopKind::Ground)
            .with_health(100.0)
            .with_speed(1.0)
            .with_attack(10.0)
    }

    #[test]
    fn test_new_world() {
        let world = World::new(&MatchConfig::default());
        assert_eq!(world.balance(Side::Player), 15);
        assert_eq!(world.balance(Side::Ai), 15);
        assert_eq!(world.tower_health(Side::Ai), 1800.0);
        assert_eq!(world.lanes(), 2);
        assert!(world.units().is_empty());
    }

    #[test]
    fn test_try_spend() {
        let mut state = SideState {
            balance: 3,
            tower: Tower { health: 10.0 },
        };
        assert!(!state.try_spend(4));
        assert_eq!(state.balance, 3);
        assert!(state.try_spend(3));
        assert_eq!(state.balance, 0);
    }

    #[test]
    fn test_credit_and_drain_bounds() {
        let mut state = SideState {
            balance: 18,
            tower: Tower { health: 10.0 },
        };
        assert_eq!(state.credit(5, 20), 2);
        assert_eq!(state.balance, 20);
        assert_eq!(state.drain(25), 20);
        assert_eq!(state.balance, 0);
    }

    #[test]
    fn test_deploy_spawn_edges() {
        let mut world = World::new(&MatchConfig::default());
        let p = world.deploy(&card(2), Side::Player, 0).unwrap();
        let a = world.deploy(&card(2), Side::Ai, 1).unwrap();

        assert_eq!(world.unit(p).unwrap().position, 0.0);
        assert_eq!(world.unit(a).unwrap().position, 19.0);
        assert_eq!(world.balance(Side::Player), 13);
        assert_eq!(world.balance(Side::Ai), 13);
        assert_ne!(p, a);
    }

    #[test]
    fn test_deploy_rejections() {
        let mut world = World::new(&MatchConfig::default().with_starting_resource(1));
        assert_eq!(
            world.deploy(&card(2), Side::Player, 0),
            Err(DeployError::InsufficientResource {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(
            world.deploy(&card(1), Side::Player, 5),
            Err(DeployError::InvalidLane { lane: 5, lanes: 2 })
        );
        assert_eq!(world.balance(Side::Player), 1);
        assert!(world.units().is_empty());
    }

    #[test]
    fn test_prune_dead() {
        let mut world = World::new(&MatchConfig::default());
        let a = world.deploy(&card(1), Side::Player, 0).unwrap();
        let b = world.deploy(&card(1), Side::Player, 0).unwrap();
        world.unit_mut(a).unwrap().health = 0.0;

        assert_eq!(world.prune_dead(), 1);
        assert!(world.unit(a).is_none());
        assert!(world.unit(b).is_some());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut world = World::new(&MatchConfig::default());
        world.deploy(&card(1), Side::Player, 0).unwrap();
        let snapshot = world.snapshot();

        world.units_mut()[0].position = 5.0;
        assert_eq!(snapshot.units[0].position, 0.0);
        assert_eq!(snapshot.balances[Side::Player], 14);
    }
}
