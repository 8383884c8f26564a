//! Card templates - immutable stat blueprints.
//!
//! A `CardTemplate` holds everything needed to put a unit on the field:
//! its cost, base stats and the identifier of the ability it carries. The
//! match consumes templates by value when spawning; it never mutates them.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeValue, Attributes};
use crate::abilities::AbilityId;

/// Identifier of a card in the catalog (e.g. `"neil"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a unit travels, which decides who can target it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TroopKind {
    Ground,
    Air,
    Underground,
    Building,
}

/// Deck slot a card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Character,
    Building,
    Potion,
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::Character => write!(f, "character"),
            CardCategory::Building => write!(f, "building"),
            CardCategory::Potion => write!(f, "potion"),
        }
    }
}

/// Static unit blueprint.
///
/// Optional stats mean "feature absent": no `attack` means the unit never
/// deals combat damage, no `speed` means it never moves, no `health` means
/// the match default applies at spawn.
///
/// ```
/// use lane_war::cards::{CardTemplate, TroopKind};
///
/// let brute = CardTemplate::new("neil", "Neil", 4, TroopKind::Ground)
///     .with_health(150.0)
///     .with_raw_speed(40.0)
///     .with_attack(30.0)
///     .with_ability("neil_death_sword")
///     .with_param("death_damage", 50.0);
///
/// assert_eq!(brute.cost, 4);
/// assert_eq!(brute.speed, Some(0.8));
/// assert_eq!(brute.params.float("death_damage"), Some(50.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Catalog identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Resource cost to deploy.
    pub cost: u32,

    /// Travel kind.
    pub kind: TroopKind,

    /// Starting and maximum health.
    pub health: Option<f64>,

    /// Normalized speed (lane units per tick before the movement scale).
    pub speed: Option<f64>,

    /// Damage dealt to each adjacent enemy per tick.
    pub attack: Option<f64>,

    /// Death ability identifier.
    pub ability: Option<AbilityId>,

    /// Role and ability tunables.
    pub params: Attributes,
}

impl CardTemplate {
    /// Create a template with only the mandatory fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32, kind: TroopKind) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            kind,
            health: None,
            speed: None,
            attack: None,
            ability: None,
            params: Attributes::new(),
        }
    }

    /// Set health (builder pattern).
    #[must_use]
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    /// Set an already-normalized speed (builder pattern).
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set speed from the authored raw value (builder pattern).
    #[must_use]
    pub fn with_raw_speed(self, raw: f64) -> Self {
        self.with_speed(crate::core::normalize_speed(raw))
    }

    /// Set attack (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Set the death ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(AbilityId::new(ability));
        self
    }

    /// Add a role or ability parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.params.insert(key, value);
        self
    }
}
