//! Property-based tests for the automaton model, product construction,
//! classification and combinatorics.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use allen_automata::allen::{classify, normalize, AllenRelation, ENDPOINT_TOKENS};
use allen_automata::builder::AutomatonBuilder;
use allen_automata::clock::{build_clock, CLOCK_SYMBOL};
use allen_automata::combinatorics::{binomial, count_order_patterns};
use allen_automata::product::superpose;
use allen_automata::simulation::simulate;
use allen_automata::Automaton;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn probability()(p in 0.0f64..=1.0) -> f64 {
        p
    }
}

prop_compose! {
    fn sampled_symbol()(index in 0..10usize) -> String {
        match index {
            0 => CLOCK_SYMBOL.to_string(),
            1 => "zz".to_string(),
            i => format!("{},t", ENDPOINT_TOKENS[i - 2]),
        }
    }
}

proptest! {
    #[test]
    fn clock_shape_holds(n in 2usize..60) {
        let clock = build_clock(n).unwrap();
        prop_assert_eq!(clock.state_count(), n);
        prop_assert_eq!(clock.edge_count(), n - 1);
        let finals: Vec<&str> = clock.final_labels().collect();
        let last = (n - 1).to_string();
        prop_assert_eq!(finals, vec![last.as_str()]);

        let mut rng = StdRng::seed_from_u64(n as u64);
        let walk = simulate(&clock, &mut rng);
        prop_assert!(walk.valid);
        prop_assert_eq!(walk.symbols, vec![CLOCK_SYMBOL.to_string(); n - 1]);
    }

    #[test]
    fn last_transition_write_wins(first in probability(), second in probability()) {
        let mut automaton = Automaton::new("m", "s");
        automaton.add_state("t1");
        automaton.add_state("t2");
        automaton.add_transition("s", "t1", "x", first).unwrap();
        automaton.add_transition("s", "t2", "x", second).unwrap();

        let state = automaton.state("s").unwrap();
        prop_assert_eq!(state.probability("x"), Some(second));
        prop_assert_eq!(state.transition("x").map(|t| t.target), automaton.id_of("t2"));
        prop_assert_eq!(state.transitions().len(), 1);
    }

    #[test]
    fn product_edges_follow_composition_formula(
        pa in probability(),
        pb in probability(),
    ) {
        let left = AutomatonBuilder::new()
            .start("a0")
            .transition("a0", "a1", "x", pa)
            .final_state("a1")
            .build()
            .unwrap();
        let right = AutomatonBuilder::new()
            .start("b0")
            .transition("b0", "b1", "y", pb)
            .final_state("b1")
            .build()
            .unwrap();

        let product = superpose(&left, &right).unwrap();
        let start = product.state("a0,b0").unwrap();

        prop_assert!((start.probability("x").unwrap() - pa * (1.0 - pb)).abs() < 1e-12);
        prop_assert!((start.probability("y").unwrap() - (1.0 - pa) * pb).abs() < 1e-12);
        prop_assert!((start.probability("x,y").unwrap() - pa * pb).abs() < 1e-12);
        prop_assert!((start.total_weight() - (pa + pb - pa * pb)).abs() < 1e-12);
    }

    #[test]
    fn classification_is_total_and_consistent(
        path in prop::collection::vec(sampled_symbol(), 0..8)
    ) {
        let relation = classify(&path);
        let key = normalize(&path).join("_");
        prop_assert_eq!(relation, AllenRelation::from_key(&key));
        if let Some(relation) = relation {
            prop_assert_eq!(relation.key(), key.as_str());
        }
    }

    #[test]
    fn clock_ticks_never_change_classification(
        relation_index in 0..13usize,
        padding in prop::collection::vec(0..3usize, 4)
    ) {
        let relation = AllenRelation::ALL[relation_index];
        let mut path = Vec::new();
        for (token, pad) in relation.key().split('_').zip(padding) {
            path.extend(std::iter::repeat(CLOCK_SYMBOL.to_string()).take(pad));
            path.push(format!("{token},{CLOCK_SYMBOL}"));
        }
        prop_assert_eq!(classify(&path), Some(relation));
    }

    #[test]
    fn binomial_is_symmetric(n in 0i64..40, r in 0i64..40) {
        prop_assume!(r <= n);
        prop_assert_eq!(binomial(n, r), binomial(n, n - r));
    }

    #[test]
    fn binomial_satisfies_pascal(n in 1i64..40, r in 1i64..40) {
        prop_assume!(r <= n);
        prop_assert_eq!(binomial(n, r), binomial(n - 1, r - 1) + binomial(n - 1, r));
    }

    #[test]
    fn order_patterns_match_hockey_stick(n in 4i64..60) {
        prop_assert_eq!(count_order_patterns(n), binomial(n + 1, 5));
    }
}
