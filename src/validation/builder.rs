//! Builder API for creating validation rules.

use crate::core::Automaton;
use crate::validation::rules::ValidationRules;
use crate::validation::violations::ProbabilityViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating validation rules
#[derive(Default)]
pub struct ValidationBuilder {
    rules: ValidationRules,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slack allowed above 1 for a state's outgoing mass
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.rules.tolerance = tolerance;
        self
    }

    /// Skip the per-state mass check
    pub fn allow_excess_mass(mut self) -> Self {
        self.rules.check_mass = false;
        self
    }

    /// Fail automata with an empty final set
    pub fn require_final(mut self) -> Self {
        self.rules.require_final = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Automaton) -> Validation<(), NonEmptyVec<ProbabilityViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.rules.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Automaton) -> bool + Send + Sync + 'static,
    {
        let check = move |automaton: &Automaton| {
            if predicate(automaton) {
                Validation::success(())
            } else {
                Validation::fail(ProbabilityViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.rules.custom_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> ValidationRules {
        self.rules
    }
}
