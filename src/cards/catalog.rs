//! Card catalog for template lookup.
//!
//! The catalog stores every card a match may use: unit templates
//! (characters and buildings) and potions. `CardCatalog::standard()` holds
//! the shipped stat tables; hosts may also build their own.

use rustc_hash::FxHashMap;

use super::attributes::keys;
use super::definition::{CardCategory, CardId, CardTemplate, TroopKind};
use super::potion::{Potion, PotionKind};

/// Identifiers of the shipped cards.
pub mod ids {
    pub const NEIL: &str = "neil";
    pub const UDAY: &str = "uday";
    pub const CHAHAK: &str = "chahak";
    pub const NAYSHA: &str = "naysha";
    pub const SHUBHAN: &str = "shubhan";
    pub const AAYANSH: &str = "aayansh";
    pub const ADYA: &str = "adya";
    pub const NOEL: &str = "noel";
    pub const RISHET: &str = "rishet";
    pub const ADVIK: &str = "advik";

    pub const CATAPULT: &str = "catapult";
    pub const IRON_WALL: &str = "iron_wall";
    pub const PEEKABOO_SHUBHAN: &str = "peekaboo_shubhan";
    pub const DUUS: &str = "duus";
    pub const MAGE_TOWER: &str = "mage_tower";

    pub const FROST: &str = "frost";
    pub const BURN: &str = "burn";
    pub const HEAL: &str = "heal";
    pub const BUFF: &str = "buff";
    pub const NERF: &str = "nerf";
}

/// Registry of card definitions.
///
/// ```
/// use lane_war::cards::{CardCatalog, CardCategory};
///
/// let catalog = CardCatalog::standard();
/// let neil = catalog.template("neil").unwrap();
/// assert_eq!(neil.cost, 4);
/// assert_eq!(catalog.category("iron_wall"), Some(CardCategory::Building));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: FxHashMap<CardId, (CardCategory, CardTemplate)>,
    potions: FxHashMap<CardId, Potion>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit template under a category.
    ///
    /// A template registered twice replaces the earlier entry.
    pub fn register(&mut self, category: CardCategory, template: CardTemplate) {
        self.templates.insert(template.id.clone(), (category, template));
    }

    /// Register a potion.
    pub fn register_potion(&mut self, potion: Potion) {
        self.potions.insert(potion.id.clone(), potion);
    }

    /// Look up a unit template.
    #[must_use]
    pub fn template(&self, id: &str) -> Option<&CardTemplate> {
        self.templates.get(&CardId::new(id)).map(|(_, t)| t)
    }

    /// Look up a potion.
    #[must_use]
    pub fn potion(&self, id: &str) -> Option<&Potion> {
        self.potions.get(&CardId::new(id))
    }

    /// Category of any registered card.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<CardCategory> {
        let key = CardId::new(id);
        if let Some((category, _)) = self.templates.get(&key) {
            return Some(*category);
        }
        self.potions.get(&key).map(|_| CardCategory::Potion)
    }

    /// Number of registered cards, potions included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len() + self.potions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.potions.is_empty()
    }

    /// Unit templates of one category, in id order.
    #[must_use]
    pub fn by_category(&self, category: CardCategory) -> Vec<&CardTemplate> {
        let mut found: Vec<_> = self
            .templates
            .values()
            .filter(|(c, _)| *c == category)
            .map(|(_, t)| t)
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// The shipped card tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for template in standard_characters() {
            catalog.register(CardCategory::Character, template);
        }
        for template in standard_buildings() {
            catalog.register(CardCategory::Building, template);
        }
        for potion in standard_potions() {
            catalog.register_potion(potion);
        }
        catalog
    }
}

fn standard_characters() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new(ids::NEIL, "Neil - The Brute", 4, TroopKind::Ground)
            .with_health(150.0)
            .with_raw_speed(40.0)
            .with_attack(30.0)
            .with_ability("neil_death_sword")
            .with_param(keys::ROLE, "melee")
            .with_param(keys::DEATH_DAMAGE, 50.0),
        CardTemplate::new(ids::UDAY, "Uday - The Snipe", 2, TroopKind::Ground)
            .with_health(120.0)
            .with_raw_speed(20.0)
            .with_attack(20.0)
            .with_ability("uday_lane_arrow")
            .with_param(keys::ROLE, "ranged")
            .with_param(keys::RANGE, 5.0)
            .with_param(keys::DEATH_LANE_DAMAGE, 15.0)
            .with_param(keys::DEATH_TOWER_DAMAGE, 20.0),
        CardTemplate::new(ids::CHAHAK, "Chahak - The Bomb", 2, TroopKind::Ground)
            .with_health(80.0)
            .with_raw_speed(15.0)
            .with_attack(15.0)
            .with_ability("chahak_explosion")
            .with_param(keys::ROLE, "explosive")
            .with_param(keys::RANGE, 3.0)
            .with_param(keys::ALLY_SELF_DAMAGE_PERCENT, 0.4),
        CardTemplate::new(ids::NAYSHA, "Naysha - The Shadow", 2, TroopKind::Ground)
            .with_health(50.0)
            .with_raw_speed(45.0)
            .with_attack(10.0)
            .with_ability("naysha_poison_path")
            .with_param(keys::ROLE, "assassin")
            .with_param(keys::POISON_PER_SECOND, 5.0)
            .with_param(keys::ZONE_DAMAGE_PER_SECOND, 3.0)
            .with_param(keys::ZONE_RADIUS, 2.0)
            .with_param(keys::ZONE_DURATION, 8000.0),
        CardTemplate::new(ids::SHUBHAN, "Shubhan - The Boulder", 4, TroopKind::Ground)
            .with_raw_speed(30.0)
            .with_attack(40.0)
            .with_ability("shubhan_roll")
            .with_param(keys::ROLE, "rolling"),
        CardTemplate::new(ids::AAYANSH, "Aayansh - The Giant", 4, TroopKind::Ground)
            .with_health(80.0)
            .with_raw_speed(30.0)
            .with_attack(35.0)
            .with_ability("aayansh_death_buff")
            .with_param(keys::ROLE, "magic_melee")
            .with_param(keys::MAGIC_RANGE, 4.0)
            .with_param(keys::MAGIC_DAMAGE, 30.0)
            .with_param(keys::BUFF_ATTACK_PERCENT, 0.3)
            .with_param(keys::BUFF_HEALTH_PERCENT, 0.5)
            .with_param(keys::BUFF_DURATION, 10_000.0),
        CardTemplate::new(ids::ADYA, "Adya - The Furnace", 3, TroopKind::Air)
            .with_health(60.0)
            .with_raw_speed(25.0)
            .with_attack(30.0)
            .with_ability("adya_coal_barrier")
            .with_param(keys::ROLE, "priority_air")
            .with_param(keys::RANGE, 3.0)
            .with_param(keys::TARGET_PRIORITY, "air_first"),
        CardTemplate::new(ids::NOEL, "Noel - The Summoner", 3, TroopKind::Air)
            .with_health(60.0)
            .with_raw_speed(25.0)
            .with_ability("noel_summon_nerf")
            .with_param(keys::ROLE, "summoner")
            .with_param(keys::MAGIC_DAMAGE, 25.0)
            .with_param(keys::RANGE, 3.0)
            .with_param(keys::INTERVAL, 45_000_i64)
            .with_param(keys::SUMMON_COUNT, 3_i64)
            .with_param(keys::SUMMON_HEALTH, 1.0)
            .with_param(keys::SUMMON_DAMAGE, 15.0)
            .with_param(keys::NERF_PERCENT, 0.3),
        CardTemplate::new(ids::RISHET, "Rishet - The Heist", 5, TroopKind::Underground)
            .with_raw_speed(25.0)
            .with_ability("rishet_steal")
            .with_param(keys::ROLE, "dudu_steal")
            .with_param(keys::USES_LIMIT, 2_i64)
            .with_param(keys::STEAL_MIN, 2_i64)
            .with_param(keys::STEAL_MAX, 3_i64),
        CardTemplate::new(ids::ADVIK, "Advik - The Flash", 3, TroopKind::Underground)
            .with_health(110.0)
            .with_raw_speed(30.0)
            .with_ability("advik_bridge_block")
            .with_param(keys::ROLE, "bridge_shield"),
    ]
}

fn standard_buildings() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new(ids::CATAPULT, "Catapult", 4, TroopKind::Building)
            .with_health(100.0)
            .with_attack(50.0)
            .with_ability("catapult_fire")
            .with_param(keys::ROLE, "offense")
            .with_param(keys::INTERVAL, 20_000_i64),
        CardTemplate::new(ids::IRON_WALL, "Iron Wall", 4, TroopKind::Building)
            .with_health(150.0)
            .with_ability("iron_wall_block")
            .with_param(keys::ROLE, "defense")
            .with_param(keys::DURATION, 30_000_i64),
        CardTemplate::new(ids::PEEKABOO_SHUBHAN, "Peekaboo - Shubhan", 5, TroopKind::Building)
            .with_health(40.0)
            .with_ability("peekaboo_release")
            .with_param(keys::ROLE, "hybrid")
            .with_param("release_damage_multiplier", 0.5),
        CardTemplate::new(ids::DUUS, "Duus", 3, TroopKind::Building)
            .with_health(70.0)
            .with_ability("duus_boost")
            .with_param(keys::ROLE, "production")
            .with_param(keys::INTERVAL, 1500_i64),
        CardTemplate::new(ids::MAGE_TOWER, "Mage Tower", 4, TroopKind::Building)
            .with_health(70.0)
            .with_ability("mage_tower_buff")
            .with_param(keys::ROLE, "buff")
            .with_param("buff_percent", 0.3),
    ]
}

fn standard_potions() -> Vec<Potion> {
    vec![
        Potion::new(ids::FROST, "Frost", PotionKind::Frost, 30_000.0),
        Potion::new(ids::BURN, "Burn", PotionKind::Burn, 45_000.0),
        Potion::new(ids::HEAL, "Heal", PotionKind::Heal, 30_000.0),
        Potion::new(ids::BUFF, "Buff", PotionKind::Buff, 45_000.0),
        Potion::new(ids::NERF, "Nerf", PotionKind::Nerf, 45_000.0),
    ]
}
