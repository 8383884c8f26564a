//! Scripted opponent tests.
//!
//! These tests call the policy directly on hand-built worlds, and run it
//! through full matches to check it never overspends.

use lane_war::ai::{OpponentPolicy, Rule, ScriptedAi};
use lane_war::cards::{ids, CardCatalog, CardTemplate, TroopKind};
use lane_war::core::{AiConfig, GameRng, MatchConfig, Side, World};
use lane_war::game::MatchBuilder;

fn ai() -> ScriptedAi {
    ScriptedAi::new(&CardCatalog::standard(), AiConfig::default()).unwrap()
}

fn world(balance: u32) -> World {
    World::new(&MatchConfig::default().with_starting_resource(balance))
}

fn threat(world: &mut World, lane: usize, health: f64, kind: TroopKind) {
    let card = CardTemplate::new("threat", "Threat", 0, kind).with_health(health);
    world.deploy(&card, Side::Player, lane).unwrap();
}

fn cards(decision: &lane_war::ai::Decision) -> Vec<&str> {
    decision.deployed.iter().map(|(card, _)| card.as_str()).collect()
}

/// Balance 1 is below the minimum: no deployment.
#[test]
fn test_minimum_balance_gate() {
    let mut ai = ai();
    let mut world = world(1);
    threat(&mut world, 0, 500.0, TroopKind::Ground);

    let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(0));

    assert_eq!(decision.rule, Rule::Idle);
    assert!(decision.deployed.is_empty());
    assert_eq!(world.balance(Side::Ai), 1);
}

/// An airborne threat is answered with the anti-air card in that lane.
#[test]
fn test_emergency_defense_air() {
    let mut ai = ai();
    let mut world = world(3);
    threat(&mut world, 1, 150.0, TroopKind::Air);
    threat(&mut world, 1, 100.0, TroopKind::Ground);

    let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(0));

    assert_eq!(decision.rule, Rule::EmergencyDefense);
    assert_eq!(decision.lane, Some(1));
    assert_eq!(cards(&decision), vec![ids::ADYA]);
    let unit = world.unit(decision.deployed[0].1).unwrap();
    assert_eq!(unit.lane, 1);
    assert_eq!(unit.side, Side::Ai);
}

/// Ground-only threats get the general defender, and only one card.
#[test]
fn test_emergency_defense_ground() {
    let mut ai = ai();
    let mut world = world(20);
    threat(&mut world, 0, 201.0, TroopKind::Ground);

    let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(0));

    assert_eq!(decision.rule, Rule::EmergencyDefense);
    assert_eq!(cards(&decision), vec![ids::NOEL]);
    assert_eq!(world.balance(Side::Ai), 17);
}

/// Emergency defense preempts everything even when nothing is affordable.
#[test]
fn test_emergency_defense_unaffordable() {
    let mut ai = ai();
    let mut world = world(2);
    threat(&mut world, 0, 300.0, TroopKind::Ground);

    let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(0));

    assert_eq!(decision.rule, Rule::EmergencyDefense);
    assert!(decision.deployed.is_empty());
    assert_eq!(world.balance(Side::Ai), 2);
}

/// Threat at exactly the threshold does not count.
#[test]
fn test_threat_threshold_is_strict() {
    let mut ai = ai();
    let mut world = world(2);
    threat(&mut world, 0, 200.0, TroopKind::Ground);

    let decision = ai.decide(&mut world, Side::Ai, &mut GameRng::new(0));
    assert_eq!(decision.rule, Rule::BasicPlay);
}

/// The steal card is limited to two uses per match.
#[test]
fn test_combo_steal_limit() {
    let mut ai = ai();
    let mut rng = GameRng::new(4);

    for round in 0..4 {
        let mut world = world(20);
        let decision = ai.decide(&mut world, Side::Ai, &mut rng);
        assert_eq!(decision.rule, Rule::Combo);
        let played = cards(&decision);
        assert_eq!(played.contains(&ids::RISHET), round < 2, "round {round}: {played:?}");
    }
    assert_eq!(ai.uses(ids::RISHET), 2);
}

/// Lane choices stay within the arena.
#[test]
fn test_random_lanes_in_range() {
    let mut ai = ai();
    let mut rng = GameRng::new(99);
    let mut seen = [false; 2];

    for _ in 0..40 {
        let mut world = world(2);
        let decision = ai.decide(&mut world, Side::Ai, &mut rng);
        let lane = decision.lane.unwrap();
        assert!(lane < 2);
        seen[lane] = true;
    }
    assert!(seen[0] && seen[1]);
}

/// Over whole matches the AI never drives its balance negative and never
/// exceeds the cap.
#[test]
fn test_never_overspends_in_match() {
    for seed in 0..5 {
        let mut game = MatchBuilder::new().seed(seed).build().unwrap();
        let cap = game.config().resource_cap;
        let mut decisions = 0;

        for step in 0..3000 {
            if step % 250 == 0 {
                // Keep the player side applying pressure.
                let _ = game.deploy_card(ids::NEIL, Side::Player, (step / 250) % 2);
            }
            let before = game.world().balance(Side::Ai);
            let Some(report) = game.step(16.0) else {
                break;
            };
            if let Some(decision) = report.decision {
                decisions += 1;
                let spent: u32 = decision
                    .deployed
                    .iter()
                    .map(|(card, _)| game.catalog().template(card.as_str()).unwrap().cost)
                    .sum();
                assert!(spent <= before + report.income_steps);
            }
            assert!(game.world().balance(Side::Ai) <= cap);
        }
        assert!(decisions > 0);
    }
}
