//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! creating automata with minimal boilerplate, plus the interval fixture
//! the Allen estimate is built from.

pub mod machine;
pub mod macros;

pub use machine::AutomatonBuilder;

use crate::core::{Automaton, AutomatonError};

/// Build the birth/death process of one interval.
///
/// States `u_<tag>` (not yet started), `li_<tag>` (live) and `d_<tag>`
/// (dead, final) are joined by the left-endpoint symbol `l<tag>` with weight
/// `birth` and the right-endpoint symbol `r<tag>` with weight `death`.
///
/// # Example
///
/// ```
/// use allen_automata::builder::interval_automaton;
///
/// let a = interval_automaton("a", 0.5, 0.5).unwrap();
/// assert_eq!(a.start_label(), "u_a");
/// assert!(a.is_final("d_a"));
/// ```
pub fn interval_automaton(tag: &str, birth: f64, death: f64) -> Result<Automaton, AutomatonError> {
    let unborn = format!("u_{tag}");
    let live = format!("li_{tag}");
    let dead = format!("d_{tag}");

    AutomatonBuilder::new()
        .name(tag.to_uppercase())
        .start(unborn.clone())
        .transition(unborn, live.clone(), format!("l{tag}"), birth)
        .transition(live, dead.clone(), format!("r{tag}"), death)
        .final_state(dead)
        .build()
}
