//! Validation of automaton weights using stillwater's `Validation`.
//!
//! The model itself accepts any probability a caller supplies. Before a
//! long sampling run it is worth checking that every edge weight lies in
//! `[0, 1]` and no state claims more than all of the probability mass.
//! Violations are accumulated, so one pass reports every bad edge.
//!
//! # Example
//!
//! ```rust
//! use allen_automata::builder::interval_automaton;
//! use allen_automata::validation::{validate, ValidationBuilder};
//!
//! let a = interval_automaton("a", 0.5, 0.5).unwrap();
//! assert!(validate(&a).is_success());
//!
//! let rules = ValidationBuilder::new().require_final().tolerance(1e-6).build();
//! assert!(rules.check(&a).is_success());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::ValidationBuilder;
pub use rules::{ValidationRules, DEFAULT_TOLERANCE};
pub use violations::ProbabilityViolation;

use crate::core::Automaton;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check `automaton` against the default rules.
pub fn validate(automaton: &Automaton) -> Validation<(), NonEmptyVec<ProbabilityViolation>> {
    ValidationRules::default().check(automaton)
}
