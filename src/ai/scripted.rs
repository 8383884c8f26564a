//! The scripted opponent.
//!
//! Priority-ordered rules, first match wins:
//!
//! 1. Emergency defense of the most threatened lane
//! 2. Losing push when behind on tower health
//! 3. Resource-rich combo, including a limited number of resource steals
//! 4. Opportunistic single-card play
//!
//! Every deploy is gated on the card's cost, so the balance never goes
//! negative.

use rustc_hash::FxHashMap;

use super::policy::{Decision, OpponentPolicy, Rule};
use crate::cards::{ids, keys, CardCatalog, CardId, CardTemplate, TroopKind};
use crate::core::{AiConfig, GameRng, RosterError, Side, World};

/// Templates the scripted opponent plays.
#[derive(Clone, Debug)]
struct Roster {
    neil: CardTemplate,
    uday: CardTemplate,
    chahak: CardTemplate,
    naysha: CardTemplate,
    aayansh: CardTemplate,
    adya: CardTemplate,
    noel: CardTemplate,
    rishet: CardTemplate,
    iron_wall: CardTemplate,
}

impl Roster {
    fn from_catalog(catalog: &CardCatalog) -> Result<Self, RosterError> {
        let get = |id: &str| {
            catalog
                .template(id)
                .cloned()
                .ok_or_else(|| RosterError { card: CardId::new(id) })
        };
        Ok(Self {
            neil: get(ids::NEIL)?,
            uday: get(ids::UDAY)?,
            chahak: get(ids::CHAHAK)?,
            naysha: get(ids::NAYSHA)?,
            aayansh: get(ids::AAYANSH)?,
            adya: get(ids::ADYA)?,
            noel: get(ids::NOEL)?,
            rishet: get(ids::RISHET)?,
            iron_wall: get(ids::IRON_WALL)?,
        })
    }
}

/// Rule-based opponent.
///
/// ```
/// use lane_war::ai::{OpponentPolicy, Rule, ScriptedAi};
/// use lane_war::cards::CardCatalog;
/// use lane_war::core::{AiConfig, GameRng, MatchConfig, Side, World};
///
/// let catalog = CardCatalog::standard();
/// let mut ai = ScriptedAi::new(&catalog, AiConfig::default()).unwrap();
/// let mut world = World::new(&MatchConfig::default().with_starting_resource(1));
///
/// let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(3));
/// assert_eq!(decision.rule, Rule::Idle);
/// assert!(world.units().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedAi {
    roster: Roster,
    config: AiConfig,
    steal_limit: u32,
    uses: FxHashMap<CardId, u32>,
}

impl ScriptedAi {
    /// Build the opponent from a catalog. Fails if a roster card is missing.
    ///
    /// The steal card's `uses_limit` parameter, when present, overrides
    /// `AiConfig::steal_card_uses`.
    pub fn new(catalog: &CardCatalog, config: AiConfig) -> Result<Self, RosterError> {
        let roster = Roster::from_catalog(catalog)?;
        let steal_limit = roster
            .rishet
            .params
            .int(keys::USES_LIMIT)
            .map_or(config.steal_card_uses, |limit| u32::try_from(limit).unwrap_or(0));
        Ok(Self {
            roster,
            config,
            steal_limit,
            uses: FxHashMap::default(),
        })
    }

    /// How many times per match the steal card may be played.
    #[must_use]
    pub fn steal_limit(&self) -> u32 {
        self.steal_limit
    }

    /// How many times a card has been deployed by a rule that limits it.
    #[must_use]
    pub fn uses(&self, card: &str) -> u32 {
        self.uses.get(&CardId::new(card)).copied().unwrap_or(0)
    }

    /// Summed health of living enemy units in each lane.
    #[must_use]
    pub fn lane_threats(world: &World, side: Side) -> Vec<f64> {
        let mut threats = vec![0.0; world.lanes()];
        for unit in world.living(side.opponent()) {
            if let Some(slot) = threats.get_mut(unit.lane) {
                *slot += unit.health;
            }
        }
        threats
    }

    /// Most threatened lane above the threshold; ties go to the lower lane.
    fn threatened_lane(&self, world: &World, side: Side) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (lane, threat) in Self::lane_threats(world, side).into_iter().enumerate() {
            if threat > self.config.threat_threshold && best.map_or(true, |(_, b)| threat > b) {
                best = Some((lane, threat));
            }
        }
        best.map(|(lane, _)| lane)
    }

    fn defend(&self, world: &mut World, side: Side, lane: usize, decision: &mut Decision) {
        let air_threat = world
            .living(side.opponent())
            .any(|u| u.lane == lane && u.kind == TroopKind::Air);

        let roster = &self.roster;
        let choice = if air_threat && affordable(world, side, &roster.adya) {
            Some(&roster.adya)
        } else if affordable(world, side, &roster.noel) {
            Some(&roster.noel)
        } else if affordable(world, side, &roster.iron_wall) {
            Some(&roster.iron_wall)
        } else {
            None
        };

        if let Some(template) = choice {
            try_deploy(world, side, lane, template, decision);
        }
    }

    fn push(&self, world: &mut World, side: Side, lane: usize, decision: &mut Decision) {
        try_deploy(world, side, lane, &self.roster.aayansh, decision);
        try_deploy(world, side, lane, &self.roster.uday, decision);
    }

    fn combo(&mut self, world: &mut World, side: Side, lane: usize, decision: &mut Decision) {
        try_deploy(world, side, lane, &self.roster.neil, decision);
        try_deploy(world, side, lane, &self.roster.noel, decision);

        let rishet = &self.roster.rishet;
        let used = self.uses.get(&rishet.id).copied().unwrap_or(0);
        if used < self.steal_limit && try_deploy(world, side, lane, rishet, decision) {
            self.uses.insert(rishet.id.clone(), used + 1);
        }
    }

    fn basic(&self, world: &mut World, side: Side, lane: usize, rng: &mut GameRng, decision: &mut Decision) {
        let pool = [&self.roster.uday, &self.roster.chahak, &self.roster.naysha];
        if let Some(template) = rng.choose(&pool) {
            try_deploy(world, side, lane, template, decision);
        }
    }
}

fn affordable(world: &World, side: Side, template: &CardTemplate) -> bool {
    world.balance(side) >= template.cost
}

/// Deploy if affordable. Returns whether the unit was placed.
fn try_deploy(world: &mut World, side: Side, lane: usize, template: &CardTemplate, decision: &mut Decision) -> bool {
    if !affordable(world, side, template) {
        return false;
    }
    match world.deploy(template, side, lane) {
        Ok(id) => {
            decision.deployed.push((template.id.clone(), id));
            true
        }
        Err(err) => {
            log::warn!("{} could not deploy {}: {}", side, template.id, err);
            false
        }
    }
}

impl OpponentPolicy for ScriptedAi {
    fn decide(&mut self, world: &mut World, side: Side, rng: &mut GameRng) -> Decision {
        let balance = world.balance(side);
        if balance < self.config.min_balance || world.lanes() == 0 {
            return Decision::idle();
        }

        if let Some(lane) = self.threatened_lane(world, side) {
            let mut decision = Decision::new(Rule::EmergencyDefense, lane);
            self.defend(world, side, lane, &mut decision);
            return decision;
        }

        let losing = world.tower_health(side) < world.tower_health(side.opponent());
        let lane = rng.gen_range_usize(0..world.lanes());

        let decision = if losing && balance >= self.config.push_threshold {
            let mut decision = Decision::new(Rule::LosingPush, lane);
            self.push(world, side, lane, &mut decision);
            decision
        } else if balance >= self.config.combo_threshold {
            let mut decision = Decision::new(Rule::Combo, lane);
            self.combo(world, side, lane, &mut decision);
            decision
        } else {
            let mut decision = Decision::new(Rule::BasicPlay, lane);
            self.basic(world, side, lane, rng, &mut decision);
            decision
        };

        log::debug!(
            "{} {:?} in lane {}: deployed {:?} (balance {} -> {})",
            side,
            decision.rule,
            lane,
            decision.deployed.iter().map(|(card, _)| card.as_str()).collect::<Vec<_>>(),
            balance,
            world.balance(side)
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    fn setup(balance: u32) -> (ScriptedAi, World) {
        let catalog = CardCatalog::standard();
        let ai = ScriptedAi::new(&catalog, AiConfig::default()).unwrap();
        let world = World::new(&MatchConfig::default().with_starting_resource(balance));
        (ai, world)
    }

    #[test]
    fn test_missing_roster_card() {
        let err = ScriptedAi::new(&CardCatalog::new(), AiConfig::default()).unwrap_err();
        assert_eq!(err.card, CardId::new(ids::NEIL));
    }

    #[test]
    fn test_combo_deploys_in_order() {
        let (mut ai, mut world) = setup(12);
        let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(5));

        assert_eq!(decision.rule, Rule::Combo);
        let cards: Vec<_> = decision.deployed.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(cards, vec![ids::NEIL, ids::NOEL, ids::RISHET]);
        assert_eq!(world.balance(Side::Ai), 0);
        assert_eq!(ai.uses(ids::RISHET), 1);
    }

    #[test]
    fn test_steal_limit_from_card_data() {
        let mut catalog = CardCatalog::standard();
        let (ai, _) = setup(0);
        assert_eq!(ai.steal_limit(), 2);

        let rishet = catalog
            .template(ids::RISHET)
            .unwrap()
            .clone()
            .with_param(keys::USES_LIMIT, 1_i64);
        catalog.register(crate::cards::CardCategory::Character, rishet);
        let mut ai = ScriptedAi::new(&catalog, AiConfig::default()).unwrap();
        assert_eq!(ai.steal_limit(), 1);

        let mut world = World::new(&MatchConfig::default().with_starting_resource(20));
        ai.decide(&mut world, Side::Ai, &mut GameRng::new(5));
        world.side_mut(Side::Ai).balance = 20;
        let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(6));

        let cards: Vec<_> = decision.deployed.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(cards, vec![ids::NEIL, ids::NOEL]);
        assert_eq!(ai.uses(ids::RISHET), 1);
    }

    #[test]
    fn test_combo_skips_unaffordable_steal() {
        let (mut ai, mut world) = setup(7);
        let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(5));

        let cards: Vec<_> = decision.deployed.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(cards, vec![ids::NEIL, ids::NOEL]);
        assert_eq!(ai.uses(ids::RISHET), 0);
    }

    #[test]
    fn test_losing_push() {
        let (mut ai, mut world) = setup(6);
        world.side_mut(Side::Ai).tower.damage(10.0);
        let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(5));

        assert_eq!(decision.rule, Rule::LosingPush);
        let cards: Vec<_> = decision.deployed.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(cards, vec![ids::AAYANSH, ids::UDAY]);
        assert_eq!(world.balance(Side::Ai), 0);
    }

    #[test]
    fn test_basic_play_picks_from_pool() {
        for seed in 0..20 {
            let (mut ai, mut world) = setup(2);
            let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(seed));
            assert_eq!(decision.rule, Rule::BasicPlay);
            let (card, _) = &decision.deployed[0];
            assert!([ids::UDAY, ids::CHAHAK, ids::NAYSHA].contains(&card.as_str()));
            assert_eq!(world.balance(Side::Ai), 0);
        }
    }

    #[test]
    fn test_threat_ties_go_to_lower_lane() {
        let (ai, mut world) = setup(10);
        let tank = CardTemplate::new("tank", "Tank", 0, TroopKind::Ground).with_health(250.0);
        world.deploy(&tank, Side::Player, 1).unwrap();
        world.deploy(&tank, Side::Player, 0).unwrap();
        assert_eq!(ai.threatened_lane(&world, Side::Ai), Some(0));

        world.deploy(&tank, Side::Player, 1).unwrap();
        assert_eq!(ai.threatened_lane(&world, Side::Ai), Some(1));
    }
}
