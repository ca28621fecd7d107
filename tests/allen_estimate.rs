//! End-to-end estimate of Allen relations between two random intervals.

use allen_automata::allen::AllenRelation;
use allen_automata::builder::interval_automaton;
use allen_automata::clock::build_clock;
use allen_automata::product::{superpose, Composition};
use allen_automata::simulation::{estimate_relations, estimate_with, EstimateConfig};
use allen_automata::validation::validate;
use allen_automata::Automaton;

fn clocked_intervals() -> Automaton {
    let a = interval_automaton("a", 0.5, 0.5).unwrap();
    let b = interval_automaton("b", 0.5, 0.5).unwrap();
    let joint = superpose(&a, &b).unwrap();
    joint
        .superpose(&build_clock(25).unwrap(), Composition::Clocked)
        .unwrap()
}

#[test]
fn composed_automaton_is_well_formed() {
    let clocked = clocked_intervals();

    assert_eq!(clocked.name(), "A x B x clock");
    assert_eq!(clocked.start_label(), "u_a,u_b,0");
    assert!(validate(&clocked).is_success());
    assert!(clocked.final_labels().next().is_some());
}

#[test]
fn ten_thousand_trials_produce_relations() {
    let clocked = clocked_intervals();
    let config = EstimateConfig::builder().trials(10_000).seed(2024).build();

    let estimate = estimate_with(&clocked, &config);
    assert!(estimate.valid() > 0);

    let counts = estimate.relation_counts();
    assert!(counts.total() <= estimate.valid());
    assert!(counts.total() > 0);
}

#[test]
fn parallel_report_is_consistent() {
    let clocked = clocked_intervals();
    let config = EstimateConfig::builder()
        .trials(10_000)
        .seed(99)
        .parallel(true)
        .build();

    let report = estimate_relations(&clocked, &config);
    assert_eq!(report.trials, 10_000);
    assert!(report.valid > 0);
    assert!(report.classified() <= report.valid);
    assert_eq!(report.valid + report.invalid(), report.trials);

    let total: f64 = report.distribution().iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn symmetric_intervals_give_symmetric_relations() {
    let clocked = clocked_intervals();
    let config = EstimateConfig::builder()
        .trials(40_000)
        .seed(7)
        .parallel(true)
        .build();

    let report = estimate_relations(&clocked, &config);
    let classified = report.classified() as f64;
    assert!(classified > 1_000.0);

    for relation in [
        AllenRelation::Precedes,
        AllenRelation::Overlaps,
        AllenRelation::During,
    ] {
        let forward = report.counts.get(relation) as f64 / classified;
        let backward = report.counts.get(relation.inverse()) as f64 / classified;
        assert!(
            (forward - backward).abs() < 0.03,
            "{relation}: {forward} vs {backward}"
        );
    }
}
