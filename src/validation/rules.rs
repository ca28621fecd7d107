//! Validation rules for automata, accumulating every violation.

use crate::core::Automaton;
use crate::validation::violations::ProbabilityViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom validation check functions
pub type AutomatonCheck =
    Box<dyn Fn(&Automaton) -> Validation<(), NonEmptyVec<ProbabilityViolation>> + Send + Sync>;

/// Default slack when comparing a state's outgoing mass against 1.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Rules an automaton must satisfy before it is sampled.
pub struct ValidationRules {
    pub(crate) tolerance: f64,
    pub(crate) check_mass: bool,
    pub(crate) require_final: bool,
    pub(crate) custom_checks: Vec<AutomatonCheck>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            check_mass: true,
            require_final: false,
            custom_checks: Vec::new(),
        }
    }
}

impl ValidationRules {
    /// Check every rule, collecting ALL violations.
    pub fn check(&self, automaton: &Automaton) -> Validation<(), NonEmptyVec<ProbabilityViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ProbabilityViolation>>> = Vec::new();

        for edge in automaton.edges() {
            let p = edge.probability;
            let check = if p.is_finite() && (0.0..=1.0).contains(&p) {
                Validation::success(())
            } else {
                Validation::fail(ProbabilityViolation::OutOfRange {
                    from: edge.source.to_string(),
                    to: edge.target.to_string(),
                    symbol: edge.symbol.to_string(),
                    probability: p,
                })
            };
            checks.push(check);
        }

        if self.check_mass {
            for view in automaton.states() {
                let total = automaton
                    .state(view.label)
                    .map(|s| s.total_weight())
                    .unwrap_or(0.0);
                let check = if total <= 1.0 + self.tolerance {
                    Validation::success(())
                } else {
                    Validation::fail(ProbabilityViolation::ExcessMass {
                        label: view.label.to_string(),
                        total,
                    })
                };
                checks.push(check);
            }
        }

        if self.require_final {
            let check = if automaton.final_labels().next().is_some() {
                Validation::success(())
            } else {
                Validation::fail(ProbabilityViolation::NoFinalState {
                    name: automaton.name().to_string(),
                })
            };
            checks.push(check);
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(automaton));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
