//! Potion cards.
//!
//! Potions are not units: casting one applies an immediate stat change to
//! the living units of one lane and starts a per-side cooldown measured on
//! the match clock. Harmful potions hit the caster's enemies, beneficial
//! ones hit the caster's allies.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::units::Unit;

/// What a potion does to each unit it touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    /// Halve speed.
    Frost,
    /// Flat 20 damage.
    Burn,
    /// Restore 30 health.
    Heal,
    /// Attack and health ×1.3.
    Buff,
    /// Attack and speed ×0.7.
    Nerf,
}

impl PotionKind {
    /// Whether the potion lands on the caster's own units.
    #[must_use]
    pub const fn targets_allies(self) -> bool {
        matches!(self, PotionKind::Heal | PotionKind::Buff)
    }

    /// Apply the potion to one unit.
    pub fn apply(self, unit: &mut Unit) {
        match self {
            PotionKind::Frost => unit.scale_speed(0.5),
            PotionKind::Burn => unit.take_damage(20.0),
            PotionKind::Heal => unit.health += 30.0,
            PotionKind::Buff => {
                unit.scale_attack(1.3);
                unit.health *= 1.3;
            }
            PotionKind::Nerf => {
                unit.scale_attack(0.7);
                unit.scale_speed(0.7);
            }
        }
    }
}

/// A potion card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub id: CardId,
    pub name: String,
    pub kind: PotionKind,
    /// Time before the same side may cast this potion again.
    pub cooldown_ms: f64,
}

impl Potion {
    /// Create a potion card.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PotionKind, cooldown_ms: f64) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            kind,
            cooldown_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, TroopKind};
    use crate::core::{Side, UnitId};

    fn unit() -> Unit {
        let card = CardTemplate::new("u", "U", 2, TroopKind::Ground)
            .with_health(100.0)
            .with_speed(1.0)
            .with_attack(10.0);
        Unit::from_template(UnitId(1), &card, Side::Player, 0, 0.0, 100.0)
    }

    #[test]
    fn test_targeting() {
        assert!(PotionKind::Heal.targets_allies());
        assert!(PotionKind::Buff.targets_allies());
        assert!(!PotionKind::Burn.targets_allies());
        assert!(!PotionKind::Frost.targets_allies());
        assert!(!PotionKind::Nerf.targets_allies());
    }

    #[test]
    fn test_apply() {
        let mut u = unit();
        PotionKind::Frost.apply(&mut u);
        assert_eq!(u.speed, Some(0.5));

        PotionKind::Burn.apply(&mut u);
        assert_eq!(u.health, 80.0);

        PotionKind::Heal.apply(&mut u);
        assert_eq!(u.health, 110.0);

        let mut u = unit();
        PotionKind::Nerf.apply(&mut u);
        assert!((u.attack.unwrap() - 7.0).abs() < 1e-9);
        assert!((u.speed.unwrap() - 0.7).abs() < 1e-9);
    }
}
