//! Tower damage.

use crate::core::World;

/// Convert every living unit that has reached the enemy tower into tower
/// damage and force its health to zero so the death pass handles it.
///
/// Returns the number of units that hit a tower.
pub fn apply_tower_hits(world: &mut World, default_hit: f64) -> usize {
    let length = world.lane_length();
    let mut hits = Vec::new();

    for unit in world.units_mut().iter_mut() {
        if unit.is_alive() && unit.side.reached_enemy_tower(unit.position, length) {
            hits.push((unit.side.opponent(), unit.tower_hit(default_hit), unit.id));
            unit.health = 0.0;
        }
    }

    for &(target, amount, id) in &hits {
        world.side_mut(target).tower.damage(amount);
        log::debug!(
            "{} hit the {} tower for {} ({} left)",
            id,
            target,
            amount,
            world.tower_health(target)
        );
    }
    hits.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, TroopKind};
    use crate::core::{MatchConfig, Side};

    #[test]
    fn test_tower_hit_uses_attack() {
        let mut world = World::new(&MatchConfig::default());
        let card = CardTemplate::new("r", "R", 1, TroopKind::Ground).with_attack(20.0);
        let p = world.deploy(&card, Side::Player, 0).unwrap();
        world.unit_mut(p).unwrap().position = 20.0;

        assert_eq!(apply_tower_hits(&mut world, 20.0), 1);
        assert_eq!(world.tower_health(Side::Ai), 1780.0);
        assert_eq!(world.unit(p).unwrap().health, 0.0);
    }

    #[test]
    fn test_ai_hits_at_zero_with_default() {
        let mut world = World::new(&MatchConfig::default());
        let card = CardTemplate::new("thief", "Thief", 1, TroopKind::Underground);
        let a = world.deploy(&card, Side::Ai, 0).unwrap();
        world.unit_mut(a).unwrap().position = 0.0;

        apply_tower_hits(&mut world, 20.0);
        assert_eq!(world.tower_health(Side::Player), 1780.0);
    }

    #[test]
    fn test_dead_units_do_not_hit() {
        let mut world = World::new(&MatchConfig::default());
        let card = CardTemplate::new("r", "R", 1, TroopKind::Ground).with_attack(20.0);
        let p = world.deploy(&card, Side::Player, 0).unwrap();
        world.unit_mut(p).unwrap().position = 20.0;
        world.unit_mut(p).unwrap().health = 0.0;

        assert_eq!(apply_tower_hits(&mut world, 20.0), 0);
        assert_eq!(world.tower_health(Side::Ai), 1800.0);
    }
}
