//! Fluent builder for automata.

use crate::core::{Automaton, AutomatonError};

/// Builder for constructing automata with a fluent API.
///
/// Transition endpoints are declared as states automatically, the way a
/// form-driven editor adds both ends of a new edge before linking them.
/// Final labels are checked: naming a label that never became a state is an
/// `UnknownState` error here, unlike [`Automaton::mark_final`].
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    name: Option<String>,
    start: Option<String>,
    states: Vec<String>,
    transitions: Vec<(String, String, String, f64)>,
    finals: Vec<String>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the automaton's name (optional, defaults to the start label).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, label: impl Into<String>) -> Self {
        self.start = Some(label.into());
        self
    }

    /// Declare a state with no transitions of its own.
    pub fn state(mut self, label: impl Into<String>) -> Self {
        self.states.push(label.into());
        self
    }

    /// Add a weighted transition, declaring both endpoints.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        symbol: impl Into<String>,
        probability: f64,
    ) -> Self {
        self.transitions
            .push((from.into(), to.into(), symbol.into(), probability));
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, label: impl Into<String>) -> Self {
        self.finals.push(label.into());
        self
    }

    /// Build the automaton.
    pub fn build(self) -> Result<Automaton, AutomatonError> {
        let start = self.start.ok_or(AutomatonError::MissingStart)?;
        let name = self.name.unwrap_or_else(|| start.clone());
        let mut automaton = Automaton::new(name, start);

        for label in &self.states {
            automaton.add_state(label);
        }

        for (from, to, symbol, probability) in &self.transitions {
            automaton.add_state(from);
            automaton.add_state(to);
            automaton.add_transition(from, to, symbol, *probability)?;
        }

        for label in &self.finals {
            if !automaton.mark_final(label) {
                return Err(AutomatonError::UnknownState {
                    label: label.clone(),
                });
            }
        }

        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_start() {
        let result = AutomatonBuilder::new().state("a").build();
        assert!(matches!(result, Err(AutomatonError::MissingStart)));
    }

    #[test]
    fn builder_rejects_unknown_final() {
        let result = AutomatonBuilder::new()
            .start("s0")
            .final_state("elsewhere")
            .build();

        assert_eq!(
            result.err(),
            Some(AutomatonError::UnknownState {
                label: "elsewhere".to_string()
            })
        );
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new()
            .name("A")
            .start("u_a")
            .transition("u_a", "li_a", "la", 0.5)
            .transition("li_a", "d_a", "ra", 0.5)
            .final_state("d_a")
            .build()
            .unwrap();

        assert_eq!(automaton.name(), "A");
        assert_eq!(automaton.state_count(), 3);
        assert!(automaton.is_final("d_a"));
        assert_eq!(automaton.state("li_a").unwrap().probability("ra"), Some(0.5));
    }

    #[test]
    fn name_defaults_to_start_label() {
        let automaton = AutomatonBuilder::new().start("s0").build().unwrap();
        assert_eq!(automaton.name(), "s0");
    }

    #[test]
    fn declared_states_may_be_isolated() {
        let automaton = AutomatonBuilder::new()
            .start("s0")
            .state("island")
            .final_state("island")
            .build()
            .unwrap();

        assert!(automaton.is_final("island"));
        assert!(automaton.paths_to_final().is_empty());
    }
}
