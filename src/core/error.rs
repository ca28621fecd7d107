//! Automaton construction and traversal errors.

use thiserror::Error;

/// Errors raised while building or traversing an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AutomatonError {
    /// A transition or lookup referenced a label that is not a state.
    #[error("Unknown state '{label}'")]
    UnknownState { label: String },

    /// A caller-supplied parameter is outside its accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Bounded path enumeration walked deeper than the caller allowed.
    #[error("Path enumeration exceeded maximum depth {limit}")]
    DepthExceeded { limit: usize },

    #[error("Start state not specified. Call .start(label) before .build()")]
    MissingStart,
}

impl AutomatonError {
    pub(crate) fn unknown(label: impl Into<String>) -> Self {
        Self::UnknownState {
            label: label.into(),
        }
    }
}
