//! Superposition: the asynchronous product of two weighted automata.
//!
//! The product's states are pairs `"a,b"` of a state from each input. From
//! every reachable pair three kinds of edges are generated:
//!
//! - **left-only**: the left side moves on `s` while the right side idles,
//!   weighted `P_left(a, s) * residual(b)`
//! - **right-only**: the right side moves on `s` while the left side idles,
//!   weighted `residual(a) * P_right(b, s)`
//! - **joint**: both move at once on the compound symbol `"s1,s2"`,
//!   weighted `P_left(a, s1) * P_right(b, s2)`
//!
//! In [`Composition::Clocked`] mode the right automaton is a clock: left-only
//! edges are not generated, so the left side can only advance together with
//! a tick, and finality is decided by the left side alone.

use crate::core::{Automaton, AutomatonError, StateId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// How two automata are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Composition {
    /// Both sides evolve independently; a pair is final when both are.
    #[default]
    Independent,

    /// The right side is a synchronizing clock.
    Clocked,
}

fn pair_label(left: &str, right: &str) -> String {
    format!("{left},{right}")
}

/// Superpose `left` and `right` in [`Composition::Independent`] mode.
pub fn superpose(left: &Automaton, right: &Automaton) -> Result<Automaton, AutomatonError> {
    superpose_with(left, right, Composition::Independent)
}

/// Superpose `left` and `right` under the given composition mode.
///
/// Expansion is breadth-first from the pair of start states. Each pair is
/// expanded once; edges may still point at pairs that were already built.
/// The inputs are not modified.
///
/// # Errors
///
/// Returns `UnknownState` if an input's transition points at a state id it
/// does not own.
///
/// # Example
///
/// ```
/// use allen_automata::builder::interval_automaton;
/// use allen_automata::product::superpose;
///
/// let a = interval_automaton("a", 0.5, 0.5).unwrap();
/// let b = interval_automaton("b", 0.5, 0.5).unwrap();
/// let joint = superpose(&a, &b).unwrap();
///
/// assert_eq!(joint.name(), "A x B");
/// assert_eq!(joint.start_label(), "u_a,u_b");
/// assert_eq!(joint.state_count(), 9);
/// assert!(joint.is_final("d_a,d_b"));
/// ```
pub fn superpose_with(
    left: &Automaton,
    right: &Automaton,
    mode: Composition,
) -> Result<Automaton, AutomatonError> {
    let mut product = Automaton::new(
        format!("{} x {}", left.name(), right.name()),
        pair_label(left.start_label(), right.start_label()),
    );

    let mut queue: VecDeque<(StateId, StateId)> = VecDeque::new();
    queue.push_back((left.start_id(), right.start_id()));
    let mut expanded: HashSet<(StateId, StateId)> = HashSet::new();

    while let Some((a, b)) = queue.pop_front() {
        if !expanded.insert((a, b)) {
            continue;
        }

        let state_a = left.state_at(a)?;
        let state_b = right.state_at(b)?;
        let source = pair_label(state_a.label(), state_b.label());

        if mode == Composition::Independent {
            let idle_b = state_b.residual();
            for t in state_a.transitions() {
                let next_a = left.state_at(t.target)?;
                let target = pair_label(next_a.label(), state_b.label());
                product.add_state(&target);
                if left.is_final_id(t.target) && right.is_final_id(b) {
                    product.mark_final(&target);
                }
                product.add_transition(&source, &target, &t.symbol, t.probability * idle_b)?;
                queue.push_back((t.target, b));
            }
        }

        let idle_a = state_a.residual();
        for t in state_b.transitions() {
            let next_b = right.state_at(t.target)?;
            let target = pair_label(state_a.label(), next_b.label());
            product.add_state(&target);
            let is_final = match mode {
                Composition::Clocked => left.is_final_id(a),
                Composition::Independent => {
                    right.is_final_id(t.target) && left.is_final_id(a)
                }
            };
            if is_final {
                product.mark_final(&target);
            }
            product.add_transition(&source, &target, &t.symbol, idle_a * t.probability)?;
            queue.push_back((a, t.target));
        }

        for ta in state_a.transitions() {
            let next_a = left.state_at(ta.target)?;
            for tb in state_b.transitions() {
                let next_b = right.state_at(tb.target)?;
                let target = pair_label(next_a.label(), next_b.label());
                product.add_state(&target);
                let is_final = match mode {
                    Composition::Clocked => left.is_final_id(ta.target),
                    Composition::Independent => {
                        left.is_final_id(ta.target) && right.is_final_id(tb.target)
                    }
                };
                if is_final {
                    product.mark_final(&target);
                }
                let symbol = pair_label(&ta.symbol, &tb.symbol);
                product.add_transition(&source, &target, &symbol, ta.probability * tb.probability)?;
                queue.push_back((ta.target, tb.target));
            }
        }
    }

    debug!(
        automaton = product.name(),
        ?mode,
        states = product.state_count(),
        edges = product.edge_count(),
        expanded = expanded.len(),
        "superposition built"
    );

    Ok(product)
}

impl Automaton {
    /// Superpose `self` (left) with `other` (right). See [`superpose_with`].
    pub fn superpose(
        &self,
        other: &Automaton,
        mode: Composition,
    ) -> Result<Automaton, AutomatonError> {
        superpose_with(self, other, mode)
    }
}
