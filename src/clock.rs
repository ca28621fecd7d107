//! Linear-chain clock automata.
//!
//! A clock of `n` ticks is the chain `"0" -t-> "1" -t-> ... -t-> "n-1"` with
//! every edge at probability one and only the last state final. Composed in
//! [`Composition::Clocked`](crate::product::Composition::Clocked) mode it
//! bounds how long the joint process may run.

use crate::core::{Automaton, AutomatonError};

/// Symbol carried by every clock edge.
pub const CLOCK_SYMBOL: &str = "t";

/// Build a clock with `count` states.
///
/// # Errors
///
/// Returns `InvalidParameter` when `count < 2`.
pub fn build_clock(count: usize) -> Result<Automaton, AutomatonError> {
    if count < 2 {
        return Err(AutomatonError::InvalidParameter(format!(
            "clock needs at least 2 states, got {count}"
        )));
    }

    let mut clock = Automaton::new("clock", "0");
    for tick in 1..count {
        let previous = (tick - 1).to_string();
        let current = tick.to_string();
        clock.add_state(&current);
        clock.add_transition(&previous, &current, CLOCK_SYMBOL, 1.0)?;
    }
    clock.mark_final(&(count - 1).to_string());

    Ok(clock)
}
