//! Well-formedness violations.

use thiserror::Error;

/// A problem found while validating an automaton's weights.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProbabilityViolation {
    #[error("Edge '{from}' -{symbol}-> '{to}' has probability {probability} outside [0, 1]")]
    OutOfRange {
        from: String,
        to: String,
        symbol: String,
        probability: f64,
    },

    #[error("State '{label}' has outgoing mass {total} above 1")]
    ExcessMass { label: String, total: f64 },

    #[error("Automaton '{name}' has no final state")]
    NoFinalState { name: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
