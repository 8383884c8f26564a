//! Match outcome and the win condition check.

use serde::{Deserialize, Serialize};

use crate::core::{Side, World};

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(Side),
    /// Both towers fell in the same tick, or time ran out with equal towers.
    Draw,
}

impl MatchOutcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, MatchOutcome::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Winner(side) => write!(f, "{side} wins"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Decide whether the match is over.
///
/// A destroyed tower ends the match immediately; both destroyed in the
/// same tick is a draw. Otherwise, once `match_duration_ms` has elapsed,
/// the side with more tower health wins and equal health is a draw.
/// Towers are floored at zero when the match ends.
pub fn check_outcome(world: &mut World, match_duration_ms: f64) -> Option<MatchOutcome> {
    let player_down = world.side(Side::Player).tower.is_destroyed();
    let ai_down = world.side(Side::Ai).tower.is_destroyed();

    let outcome = match (player_down, ai_down) {
        (true, true) => MatchOutcome::Draw,
        (true, false) => MatchOutcome::Winner(Side::Ai),
        (false, true) => MatchOutcome::Winner(Side::Player),
        (false, false) if world.elapsed_ms() >= match_duration_ms => {
            let player = world.tower_health(Side::Player);
            let ai = world.tower_health(Side::Ai);
            if player > ai {
                MatchOutcome::Winner(Side::Player)
            } else if ai > player {
                MatchOutcome::Winner(Side::Ai)
            } else {
                MatchOutcome::Draw
            }
        }
        (false, false) => return None,
    };

    for side in Side::ALL {
        world.side_mut(side).tower.clamp();
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    fn world() -> World {
        World::new(&MatchConfig::default().with_tower_health(100.0))
    }

    #[test]
    fn test_running_match() {
        let mut world = world();
        assert_eq!(check_outcome(&mut world, 1000.0), None);
    }

    #[test]
    fn test_tower_destroyed() {
        let mut world = world();
        world.side_mut(Side::Ai).tower.damage(120.0);
        assert_eq!(check_outcome(&mut world, 1000.0), Some(MatchOutcome::Winner(Side::Player)));
        assert_eq!(world.tower_health(Side::Ai), 0.0);
    }

    #[test]
    fn test_simultaneous_destruction_is_draw() {
        let mut world = world();
        world.side_mut(Side::Ai).tower.damage(100.0);
        world.side_mut(Side::Player).tower.damage(300.0);
        assert_eq!(check_outcome(&mut world, 1000.0), Some(MatchOutcome::Draw));
    }

    #[test]
    fn test_time_expiry() {
        let mut world = world();
        world.advance_clock(1000.0);
        assert_eq!(check_outcome(&mut world, 1000.0), Some(MatchOutcome::Draw));

        world.side_mut(Side::Player).tower.damage(1.0);
        assert_eq!(check_outcome(&mut world, 1000.0), Some(MatchOutcome::Winner(Side::Ai)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MatchOutcome::Winner(Side::Player).to_string(), "player wins");
        assert!(MatchOutcome::Winner(Side::Ai).is_winner(Side::Ai));
        assert!(!MatchOutcome::Draw.is_winner(Side::Ai));
    }
}
