//! The match: world, static data and the fixed tick order.

use rustc_hash::FxHashMap;

use crate::abilities::AbilityRegistry;
use crate::ai::{AiController, Decision, OpponentPolicy, ScriptedAi};
use crate::cards::{CardCatalog, CardId, CardTemplate, Deck};
use crate::core::{
    DeployError, GameRng, MatchConfig, PotionError, RosterError, Side, SideMap, UnitId, World, WorldSnapshot,
};
use crate::economy::ResourceClock;
use crate::effects::{process_effects, EffectPassReport};
use crate::rules::{check_outcome, MatchOutcome};
use crate::systems::{advance_units, apply_tower_hits, resolve_combat, resolve_deaths, DeathReport};

/// Everything one tick did.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Economy intervals completed.
    pub income_steps: u32,
    /// Contact hits dealt.
    pub combat_hits: usize,
    pub effects: EffectPassReport,
    /// Units that reached a tower.
    pub tower_hits: usize,
    pub deaths: DeathReport,
    /// Set on the tick that ends the match.
    pub outcome: Option<MatchOutcome>,
    /// The AI decision, when its cadence fired this tick.
    pub decision: Option<Decision>,
}

/// Builder for creating a [`Match`].
///
/// ```
/// use lane_war::game::MatchBuilder;
/// use lane_war::core::{MatchConfig, Side};
///
/// let mut game = MatchBuilder::new()
///     .config(MatchConfig::default().with_starting_resource(10))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// game.deploy_card("neil", Side::Player, 0).unwrap();
/// game.step(16.0);
/// assert_eq!(game.world().balance(Side::Player), 6);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: MatchConfig,
    catalog: CardCatalog,
    abilities: AbilityRegistry,
    deck: Option<Deck>,
    seed: u64,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            catalog: CardCatalog::standard(),
            abilities: AbilityRegistry::standard(),
            deck: None,
            seed: 0,
        }
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn abilities(mut self, abilities: AbilityRegistry) -> Self {
        self.abilities = abilities;
        self
    }

    /// Restrict the player side to a validated deck.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Seed for every random stream in the match.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a match against the scripted opponent.
    pub fn build(self) -> Result<Match<ScriptedAi>, RosterError> {
        let policy = ScriptedAi::new(&self.catalog, self.config.ai.clone())?;
        Ok(self.build_with_policy(policy))
    }

    /// Build a match against a custom opponent policy.
    #[must_use]
    pub fn build_with_policy<P: OpponentPolicy>(self, policy: P) -> Match<P> {
        let rng = GameRng::new(self.seed);
        let world = World::new(&self.config);
        log::info!(
            "match starting: {} lanes of length {}, towers {}, seed {}",
            self.config.lanes,
            self.config.lane_length,
            self.config.tower_health(),
            self.seed
        );
        Match {
            ai: AiController::new(policy, Side::Ai, self.config.ai.decision_interval_ms),
            economy: ResourceClock::from_config(&self.config),
            ai_rng: rng.for_context("ai"),
            ability_rng: rng.for_context("abilities"),
            potion_ready_at: SideMap::new(|_| FxHashMap::default()),
            world,
            config: self.config,
            catalog: self.catalog,
            abilities: self.abilities,
            deck: self.deck,
            outcome: None,
            ticks: 0,
        }
    }
}

/// A running match.
///
/// Owns the world and runs every system in a fixed order on each
/// [`step`](Match::step). Human input and the AI both deploy through the
/// same world entry point.
#[derive(Clone, Debug)]
pub struct Match<P = ScriptedAi> {
    config: MatchConfig,
    world: World,
    catalog: CardCatalog,
    abilities: AbilityRegistry,
    economy: ResourceClock,
    ai: AiController<P>,
    ai_rng: GameRng,
    ability_rng: GameRng,
    potion_ready_at: SideMap<FxHashMap<CardId, f64>>,
    deck: Option<Deck>,
    outcome: Option<MatchOutcome>,
    ticks: u64,
}

impl<P: OpponentPolicy> Match<P> {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for hosts and scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn ai(&self) -> &AiController<P> {
        &self.ai
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Ticks processed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snapshot = self.world.snapshot();
        snapshot.outcome = self.outcome;
        snapshot
    }

    // === Tick ===

    /// Advance the match by `delta_ms`.
    ///
    /// Returns `None` once the match is over; no further ticks are
    /// processed after the tick that decided it.
    pub fn step(&mut self, delta_ms: f64) -> Option<TickReport> {
        if self.outcome.is_some() {
            return None;
        }
        self.ticks += 1;
        self.world.advance_clock(delta_ms);

        let income_steps = self.economy.tick(&mut self.world, delta_ms);
        advance_units(&mut self.world, self.config.movement_scale);
        let combat_hits = resolve_combat(&mut self.world, self.config.melee_range);
        let effects = process_effects(&mut self.world, delta_ms);
        let tower_hits = apply_tower_hits(&mut self.world, self.config.default_tower_hit);
        let deaths = resolve_deaths(&mut self.world, &self.abilities, &mut self.ability_rng);

        let outcome = check_outcome(&mut self.world, self.config.match_duration_ms);
        let decision = match outcome {
            Some(result) => {
                self.outcome = Some(result);
                log::info!(
                    "match over after {} ms: {} (towers: player {}, ai {})",
                    self.world.elapsed_ms(),
                    result,
                    self.world.tower_health(Side::Player),
                    self.world.tower_health(Side::Ai)
                );
                None
            }
            None => self.ai.update(&mut self.world, delta_ms, &mut self.ai_rng),
        };

        Some(TickReport {
            income_steps,
            combat_hits,
            effects,
            tower_hits,
            deaths,
            outcome,
            decision,
        })
    }

    // === Input ===

    /// Deploy a template for `side`. Takes effect from the next tick.
    pub fn deploy(&mut self, template: &CardTemplate, side: Side, lane: usize) -> Result<UnitId, DeployError> {
        if self.outcome.is_some() {
            return Err(DeployError::MatchOver);
        }
        self.world.deploy(template, side, lane)
    }

    /// Deploy a catalog card by id.
    ///
    /// When the match has a deck, the player side may only deploy cards in it.
    pub fn deploy_card(&mut self, card: &str, side: Side, lane: usize) -> Result<UnitId, DeployError> {
        let template = self
            .catalog
            .template(card)
            .cloned()
            .ok_or_else(|| DeployError::UnknownCard { card: CardId::new(card) })?;
        if side == Side::Player && self.deck.as_ref().is_some_and(|d| !d.contains(card)) {
            return Err(DeployError::NotInDeck { card: template.id });
        }
        self.deploy(&template, side, lane)
    }

    /// Cast a potion for `side` on one lane.
    ///
    /// Returns how many units it touched. Deaths it causes are handled by
    /// the next tick's death pass.
    pub fn cast_potion(&mut self, potion: &str, side: Side, lane: usize) -> Result<usize, PotionError> {
        if self.outcome.is_some() {
            return Err(PotionError::MatchOver);
        }
        let potion = self
            .catalog
            .potion(potion)
            .cloned()
            .ok_or_else(|| PotionError::UnknownPotion {
                potion: CardId::new(potion),
            })?;
        if side == Side::Player && self.deck.as_ref().is_some_and(|d| !d.contains(potion.id.as_str())) {
            return Err(PotionError::NotInDeck { potion: potion.id });
        }
        if lane >= self.world.lanes() {
            return Err(PotionError::InvalidLane {
                lane,
                lanes: self.world.lanes(),
            });
        }

        let now = self.world.elapsed_ms();
        if let Some(&ready_at) = self.potion_ready_at[side].get(&potion.id) {
            if ready_at > now {
                return Err(PotionError::OnCooldown {
                    remaining_ms: ready_at - now,
                });
            }
        }

        let targets = if potion.kind.targets_allies() { side } else { side.opponent() };
        let mut touched = 0;
        for unit in self.world.units_mut().iter_mut() {
            if unit.side == targets && unit.lane == lane && unit.is_alive() {
                potion.kind.apply(unit);
                touched += 1;
            }
        }

        log::debug!("{} cast {} on lane {}: {} units", side, potion.id, lane, touched);
        self.potion_ready_at[side].insert(potion.id, now + potion.cooldown_ms);
        Ok(touched)
    }

    /// Time left before `side` may cast `potion` again.
    #[must_use]
    pub fn potion_cooldown(&self, potion: &str, side: Side) -> f64 {
        self.potion_ready_at[side]
            .get(&CardId::new(potion))
            .map_or(0.0, |ready_at| (ready_at - self.world.elapsed_ms()).max(0.0))
    }
}
