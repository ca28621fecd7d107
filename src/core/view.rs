//! Read-only views of an automaton's states and edges for renderers.

use serde::Serialize;

/// A state as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StateView<'a> {
    pub label: &'a str,
    pub is_start: bool,
    pub is_final: bool,
}

/// An edge as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub symbol: &'a str,
    pub probability: f64,
}

impl EdgeView<'_> {
    /// Label drawn next to the edge, e.g. `"la, 0.50"`.
    pub fn display_label(&self) -> String {
        format!("{}, {:.2}", self.symbol, self.probability)
    }
}
