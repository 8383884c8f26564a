//! Lane movement.

use crate::core::World;

/// Advance every unit with a speed toward the enemy tower by
/// `speed * scale`, clamped into the lane.
///
/// Movement is per tick, not per millisecond. Units without a speed stay
/// where they were spawned, and units already at or below zero health
/// wait for the death pass.
pub fn advance_units(world: &mut World, scale: f64) {
    let length = world.lane_length();
    let mut moved = 0usize;
    for unit in world.units_mut().iter_mut() {
        if !unit.is_active() || unit.is_dead() {
            continue;
        }
        let Some(speed) = unit.speed else {
            continue;
        };
        unit.position = (unit.position + speed * scale * unit.side.direction()).clamp(0.0, length);
        moved += 1;
    }
    log::trace!("movement: {} units moved", moved);
}
