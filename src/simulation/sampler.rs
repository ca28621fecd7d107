//! Weighted random walks over an automaton.

use crate::core::Automaton;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of one random walk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    /// Symbols taken, in order.
    pub symbols: Vec<String>,

    /// True when the walk stopped in a final state; false on a dead end or
    /// when the step bound ran out.
    pub valid: bool,
}

/// Walk from the start state until a final state or a dead end.
///
/// At each non-final state one uniform draw `u` in `[0, 1)` picks the first
/// transition whose cumulative normalized weight exceeds `u`. A state
/// without transitions, or whose weights do not sum to a positive finite
/// value, ends the walk as invalid.
///
/// There is no step bound: a non-final cycle of positive weight can keep
/// the walk going indefinitely. Use [`simulate_bounded`] when the automaton
/// is not known to be absorbing.
pub fn simulate<R: Rng + ?Sized>(automaton: &Automaton, rng: &mut R) -> Walk {
    simulate_bounded(automaton, rng, None)
}

/// Like [`simulate`], giving up as invalid after `max_steps` symbols.
pub fn simulate_bounded<R: Rng + ?Sized>(
    automaton: &Automaton,
    rng: &mut R,
    max_steps: Option<usize>,
) -> Walk {
    let mut current = automaton.start_id();
    let mut symbols = Vec::new();

    loop {
        if automaton.is_final_id(current) {
            return Walk {
                symbols,
                valid: true,
            };
        }

        if max_steps.is_some_and(|limit| symbols.len() >= limit) {
            return Walk {
                symbols,
                valid: false,
            };
        }

        let Ok(state) = automaton.state_at(current) else {
            return Walk {
                symbols,
                valid: false,
            };
        };

        let transitions = state.transitions();
        let total = state.total_weight();
        if transitions.is_empty() || !(total.is_finite() && total > 0.0) {
            return Walk {
                symbols,
                valid: false,
            };
        }

        let u: f64 = rng.gen();
        let mut cumulative = 0.0;
        let mut chosen = None;
        for transition in transitions {
            cumulative += transition.probability;
            if cumulative / total > u {
                chosen = Some(transition);
                break;
            }
        }
        // rounding can leave the final cumulative share just under u
        let chosen = chosen.or_else(|| transitions.iter().rev().find(|t| t.probability > 0.0));

        let Some(transition) = chosen else {
            return Walk {
                symbols,
                valid: false,
            };
        };

        symbols.push(transition.symbol.clone());
        current = transition.target;
    }
}

impl Automaton {
    /// One random walk using the thread-local generator.
    pub fn simulate(&self) -> Walk {
        simulate(self, &mut rand::thread_rng())
    }
}
