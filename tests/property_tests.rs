//! Property tests for match-wide invariants.
//!
//! Random deploy and potion schedules are fed into full matches, and the
//! world is checked after every tick.

use lane_war::abilities::{Ability, AbilityContext};
use lane_war::cards::{ids, CardTemplate, TroopKind};
use lane_war::core::{GameRng, MatchConfig, Side, World};
use lane_war::effects::{process_effects, Effect};
use lane_war::game::MatchBuilder;
use proptest::prelude::*;

const CARDS: [&str; 10] = [
    ids::NEIL,
    ids::UDAY,
    ids::CHAHAK,
    ids::NAYSHA,
    ids::SHUBHAN,
    ids::AAYANSH,
    ids::ADYA,
    ids::NOEL,
    ids::RISHET,
    ids::ADVIK,
];

const POTIONS: [&str; 5] = [ids::FROST, ids::BURN, ids::HEAL, ids::BUFF, ids::NERF];

#[derive(Clone, Debug)]
enum Input {
    Deploy { card: usize, lane: usize },
    Potion { potion: usize, lane: usize },
    Wait,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (0..CARDS.len(), 0..2usize).prop_map(|(card, lane)| Input::Deploy { card, lane }),
        (0..POTIONS.len(), 0..2usize).prop_map(|(potion, lane)| Input::Potion { potion, lane }),
        Just(Input::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Positions stay in the lane and balances stay within [0, cap].
    #[test]
    fn prop_positions_and_balances_bounded(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input(), 1..40),
        delta in 8.0f64..250.0,
    ) {
        let mut game = MatchBuilder::new().seed(seed).build().unwrap();
        let length = game.config().lane_length;
        let cap = game.config().resource_cap;

        'outer: for input in inputs {
            match input {
                Input::Deploy { card, lane } => {
                    let _ = game.deploy_card(CARDS[card], Side::Player, lane);
                }
                Input::Potion { potion, lane } => {
                    let _ = game.cast_potion(POTIONS[potion], Side::Player, lane);
                }
                Input::Wait => {}
            }
            for _ in 0..25 {
                if game.step(delta).is_none() {
                    break 'outer;
                }
                let world = game.world();
                for unit in world.units() {
                    prop_assert!((0.0..=length).contains(&unit.position), "position {}", unit.position);
                    prop_assert!(!unit.death_processed);
                }
                for side in Side::ALL {
                    prop_assert!(world.balance(side) <= cap);
                }
            }
        }
    }

    /// Steal moves exactly min(roll, enemy balance) and never overdraws.
    #[test]
    fn prop_steal_bounded(
        seed in any::<u64>(),
        min in 0u32..6,
        spread in 0u32..6,
        enemy in 0u32..21,
        own in 0u32..21,
    ) {
        let max = min + spread;
        let mut world = World::new(&MatchConfig::default());
        world.side_mut(Side::Ai).balance = enemy;
        world.side_mut(Side::Player).balance = own;

        let card = CardTemplate::new("thief", "Thief", 0, TroopKind::Underground);
        let id = world.deploy(&card, Side::Player, 0).unwrap();
        let mut dying = world.unit(id).unwrap().clone();
        dying.death_processed = true;

        let mut rng = GameRng::new(seed);
        Ability::Steal { min, max }.apply(&dying, &mut AbilityContext::new(&mut world, &mut rng));

        let taken = enemy - world.balance(Side::Ai);
        prop_assert!(taken <= enemy);
        prop_assert!(taken <= max);
        prop_assert!(taken >= min.min(enemy));
        prop_assert!(world.balance(Side::Player) == (own + taken).min(20));
    }

    /// A 3 dps zone removes exactly 12 health over 4 s however the time is sliced.
    #[test]
    fn prop_poison_damage_independent_of_tick_size(
        cuts in prop::collection::btree_set(1u32..4000, 0..40),
    ) {
        let mut world = World::new(&MatchConfig::default());
        let card = CardTemplate::new("post", "Post", 0, TroopKind::Building).with_health(100.0);
        let id = world.deploy(&card, Side::Ai, 0).unwrap();
        world.unit_mut(id).unwrap().position = 11.0;
        world.add_effect(Effect::poison(Side::Player, 0, 10.0, 2.0, 3.0, 8000.0));

        let mut last = 0;
        for cut in cuts.into_iter().chain(std::iter::once(4000)) {
            process_effects(&mut world, f64::from(cut - last));
            last = cut;
        }

        let health = world.unit(id).unwrap().health;
        prop_assert!((health - 88.0).abs() < 1e-9, "health was {}", health);
        prop_assert_eq!(world.effects().len(), 1);
        prop_assert!((world.effects()[0].duration_ms - 4000.0).abs() < 1e-9);
    }
}
