//! Superposition Dump
//!
//! Builds two small interval automata, superposes them and prints what a
//! renderer would receive: the state list with start/final flags and the
//! labeled edge list.
//!
//! Run with: cargo run --example superpose_dump

use allen_automata::{automaton, superpose, AutomatonError};

fn main() -> Result<(), AutomatonError> {
    let a = automaton! {
        name: "A",
        start: "u_a",
        final: ["d_a"],
        transitions: [
            ("u_a", "li_a", "la", 0.5),
            ("li_a", "d_a", "ra", 0.5),
        ]
    }?;
    let b = automaton! {
        name: "B",
        start: "u_b",
        final: ["d_b"],
        transitions: [
            ("u_b", "li_b", "lb", 0.3),
            ("li_b", "d_b", "rb", 0.7),
        ]
    }?;

    let mut joint = superpose(&a, &b)?;
    joint.set_name("two intervals");
    println!("{joint}\n");

    println!("States:");
    for state in joint.states() {
        let marker = match (state.is_start, state.is_final) {
            (true, _) => "start",
            (_, true) => "final",
            _ => "",
        };
        println!("  {:<12} {marker}", state.label);
    }

    println!("\nEdges:");
    for edge in joint.edges() {
        println!("  {} -> {}  [{}]", edge.source, edge.target, edge.display_label());
    }

    println!("\nPaths to final: {}", joint.paths_to_final().len());
    Ok(())
}
