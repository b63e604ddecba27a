use galaxy_types::{CurrencyType, Planet};
use leader_core::components::CurrencyPool;
use leader_core::config::ComfortLevel;
use leader_core::systems::compute_priority;
use leader_core::{GameAction, Leader, Personality, StandardWeighting};
use proptest::prelude::*;

const COMFORT: ComfortLevel = ComfortLevel::new(20.0, 2.0);
const CEILING: i32 = 1_000;

fn priority(stockpile: i32, yield_per_turn: i32, hoarder: f32) -> f32 {
    compute_priority(
        CurrencyType::Affluence,
        &CurrencyPool::new(stockpile, yield_per_turn),
        COMFORT,
        hoarder,
        CEILING,
    )
    .expect("hoarder strictly inside (0, 1)")
}

/// Hoarder biases inside (0, 1), including ones small enough to overflow a factor
fn hoarder_bias() -> impl Strategy<Value = f32> {
    prop_oneof![f32::MIN_POSITIVE..1e-30_f32, 0.01_f32..0.99]
}

fn leader_with_values(values: &[f32]) -> Leader {
    let mut leader = Leader::new("Ada", Personality::default())
        .expect("default personality")
        .with_rng_seed(17);
    for (i, value) in values.iter().enumerate() {
        let name = format!("P{:02}", i);
        leader.introduce_planet(&Planet::new(name.clone())).expect("fresh planet");
        leader.set_planet_influence(&name, *value).expect("known planet");
    }
    leader
}

proptest! {
    #[test]
    fn property_priority_is_normalized(
        stockpile in -2_000_i32..2_000,
        yield_per_turn in -50_i32..50,
        hoarder in hoarder_bias(),
    ) {
        let p = priority(stockpile, yield_per_turn, hoarder);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn property_priority_non_increasing_in_stockpile(
        stockpile in 0_i32..1_500,
        extra in 0_i32..500,
        yield_per_turn in 0_i32..10,
        hoarder in hoarder_bias(),
    ) {
        let low = priority(stockpile, yield_per_turn, hoarder);
        let high = priority(stockpile + extra, yield_per_turn, hoarder);
        prop_assert!(high <= low);
    }

    #[test]
    fn property_priority_non_increasing_in_yield(
        stockpile in 0_i32..100,
        yield_per_turn in 0_i32..20,
        extra in 0_i32..20,
        hoarder in hoarder_bias(),
    ) {
        let low = priority(stockpile, yield_per_turn, hoarder);
        let high = priority(stockpile, yield_per_turn + extra, hoarder);
        prop_assert!(high <= low);
    }

    #[test]
    fn property_ranking_is_stable_ascending(
        buckets in prop::collection::vec(0_u8..4, 1..24),
    ) {
        let values: Vec<f32> = buckets.iter().map(|b| f32::from(*b) * 0.25).collect();
        let mut leader = leader_with_values(&values);
        leader.update_priorities().expect("default personality is not degenerate");

        let ranked = leader.ascending_sorted_planet_influences();
        prop_assert_eq!(ranked.len(), values.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].value() <= pair[1].value());
            if pair[0].value() == pair[1].value() {
                // Ties keep the order the planets were introduced in
                prop_assert!(pair[0].planet_name() < pair[1].planet_name());
            }
        }

        let profile_order: Vec<&str> = leader
            .decision_profile()
            .planet_priorities()
            .iter()
            .map(|p| p.as_str())
            .collect();
        let store_order: Vec<&str> = ranked.iter().map(|i| i.planet_name()).collect();
        prop_assert_eq!(profile_order, store_order);
    }

    #[test]
    fn property_candidate_count_matches_request(
        actions_to_get in 0_usize..12,
        spare in 0_usize..8,
        seed in any::<u64>(),
    ) {
        // The window reaches index (n / 2 - 1) + 3
        let planets = actions_to_get / 2 + 3 + spare;
        let values: Vec<f32> = (0..planets).map(|i| i as f32 / planets as f32).collect();
        let mut leader = leader_with_values(&values).with_rng_seed(seed);
        leader.update_priorities().expect("default personality is not degenerate");

        let actions = leader
            .likely_actions(&StandardWeighting, actions_to_get)
            .expect("ranking covers the window");

        prop_assert_eq!(actions.len(), (actions_to_get / 2) * 2);
        prop_assert!(actions.len() <= actions_to_get);
        for action in &actions {
            let GameAction::Diplomacy(diplomacy) = action;
            prop_assert_eq!(diplomacy.priority, 0.0);
            prop_assert_eq!(diplomacy.currency_to_decrease, diplomacy.currency_to_increase.next());
        }
    }

    #[test]
    fn property_control_is_idempotent(
        toggles in prop::collection::vec((0_usize..6, any::<bool>()), 0..40),
    ) {
        let planets: Vec<Planet> = (0..6).map(|i| Planet::new(format!("P{:02}", i))).collect();
        let mut leader = leader_with_values(&[0.0; 6]);

        for (index, gain) in toggles {
            if gain {
                leader.gain_planet_control(&planets[index]).expect("known planet");
            } else {
                leader.lose_planet_control(&planets[index]).expect("known planet");
            }
        }

        let flagged = leader.influences().filter(|i| i.is_leader()).count();
        prop_assert_eq!(leader.planet_control_count(), flagged);
        prop_assert_eq!(leader.controlled_planets().len(), flagged);
        for influence in leader.influences() {
            prop_assert_eq!(leader.controls(influence.planet_name()), influence.is_leader());
        }
    }
}

#[test]
fn test_four_candidates_for_five_planets() {
    let mut leader = leader_with_values(&[0.1, 0.2, 0.3, 0.4, 0.5]);
    leader.update_priorities().unwrap();

    for _ in 0..50 {
        assert_eq!(leader.likely_actions(&StandardWeighting, 4).unwrap().len(), 4);
    }
}
