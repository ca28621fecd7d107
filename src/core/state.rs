//! Weighted states and their per-symbol transitions.
//!
//! A state owns an ordered map from symbol to `(target, probability)`.
//! Each symbol appears at most once per state; setting a transition for a
//! symbol that is already present overwrites it in place, keeping the
//! position the symbol was first inserted at. Iteration order is therefore
//! stable, which the sampler relies on for reproducible roulette selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state inside the automaton that owns it.
///
/// Ids are only meaningful for the automaton that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its automaton's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single outgoing edge: taking `symbol` moves to `target` with weight
/// `probability`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub symbol: String,
    pub target: StateId,
    pub probability: f64,
}

/// A labeled state with its outgoing transitions.
///
/// The outgoing probabilities need not sum to one. The residual
/// `1 - total_weight()` is the chance that this process does nothing on a
/// given step, which product construction charges to the other side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    label: String,
    transitions: Vec<Transition>,
}

impl State {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            transitions: Vec::new(),
        }
    }

    /// The state's unique label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing transitions in first-insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Look up the transition taken on `symbol`.
    pub fn transition(&self, symbol: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.symbol == symbol)
    }

    /// Weight recorded for `symbol`, if the state has such a transition.
    pub fn probability(&self, symbol: &str) -> Option<f64> {
        self.transition(symbol).map(|t| t.probability)
    }

    /// Sum of all outgoing weights.
    pub fn total_weight(&self) -> f64 {
        self.transitions.iter().map(|t| t.probability).sum()
    }

    /// Probability that this state takes no action on a step.
    pub fn residual(&self) -> f64 {
        1.0 - self.total_weight()
    }

    /// True when the state has no outgoing transitions.
    pub fn is_dead_end(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Set the transition for `symbol`, overwriting any previous one.
    pub(crate) fn set_transition(&mut self, symbol: &str, target: StateId, probability: f64) {
        match self.transitions.iter_mut().find(|t| t.symbol == symbol) {
            Some(existing) => {
                existing.target = target;
                existing.probability = probability;
            }
            None => self.transitions.push(Transition {
                symbol: symbol.to_string(),
                target,
                probability,
            }),
        }
    }
}
