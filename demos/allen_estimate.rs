//! Allen Relation Estimate
//!
//! This demo estimates how two independently evolving intervals relate in
//! time, by sampling the clocked superposition of their automata.
//!
//! Key concepts:
//! - Interval automata with birth/death probabilities
//! - Superposition, then clocked superposition with a 25-tick clock
//! - Parallel Monte Carlo sampling and Allen classification
//!
//! Run with: cargo run --example allen_estimate

use allen_automata::builder::interval_automaton;
use allen_automata::clock::build_clock;
use allen_automata::combinatorics::count_order_patterns;
use allen_automata::product::{superpose, Composition};
use allen_automata::simulation::{estimate_relations, EstimateConfig};
use allen_automata::validation::validate;
use allen_automata::AutomatonError;

const TICKS: usize = 25;

fn main() -> Result<(), AutomatonError> {
    // RUST_LOG=allen_automata=debug shows product construction details
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "allen_automata=info".to_string()),
        )
        .init();

    println!("=== Allen Relation Estimate ===\n");

    let a = interval_automaton("a", 0.5, 0.5)?;
    let b = interval_automaton("b", 0.5, 0.5)?;
    let joint = superpose(&a, &b)?;
    let clocked = joint.superpose(&build_clock(TICKS)?, Composition::Clocked)?;

    if validate(&clocked).is_failure() {
        println!("Warning: composed automaton has invalid weights");
    }

    println!(
        "Composed '{}': {} states, {} edges",
        clocked.name(),
        clocked.state_count(),
        clocked.edge_count()
    );

    let config = EstimateConfig::builder()
        .trials(500_000)
        .parallel(true)
        .build();
    let report = estimate_relations(&clocked, &config);

    println!(
        "\nTrials: {}  valid: {}  classified: {}",
        report.trials,
        report.valid,
        report.classified()
    );
    println!("Order patterns over {TICKS} ticks: {}\n", count_order_patterns(TICKS as i64));

    for (relation, frequency) in report.distribution() {
        println!(
            "{:<18} {:>8}  {:>6.2}%",
            relation.name(),
            report.counts.get(relation),
            frequency * 100.0
        );
    }

    println!("\n=== Estimate Complete ===");
    Ok(())
}
