//! Core automaton data model.
//!
//! This module contains the weighted state graph everything else builds on:
//! - `State` and its ordered per-symbol transitions
//! - `Automaton`, the arena of states with start, final set and alphabet
//! - Read-only views for renderers
//! - `AutomatonError`, shared by construction and traversal

mod automaton;
mod error;
mod state;
mod view;

pub use automaton::Automaton;
pub use error::AutomatonError;
pub use state::{State, StateId, Transition};
pub use view::{EdgeView, StateView};
