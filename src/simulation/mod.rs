//! Sampling walks from an automaton and estimating relation frequencies.
//!
//! # Key Concepts
//!
//! - **Sampler**: one weighted random walk to a final state or a dead end
//! - **Monte Carlo driver**: many independent walks, invalid ones dropped
//! - **Report**: relation tallies with run metadata
//!
//! # Example
//!
//! ```rust
//! use allen_automata::builder::interval_automaton;
//! use allen_automata::clock::build_clock;
//! use allen_automata::product::{superpose, Composition};
//! use allen_automata::simulation::{estimate_relations, EstimateConfig};
//!
//! let a = interval_automaton("a", 0.5, 0.5).unwrap();
//! let b = interval_automaton("b", 0.5, 0.5).unwrap();
//! let clocked = superpose(&a, &b)
//!     .unwrap()
//!     .superpose(&build_clock(25).unwrap(), Composition::Clocked)
//!     .unwrap();
//!
//! let config = EstimateConfig::builder().trials(1_000).seed(7).build();
//! let report = estimate_relations(&clocked, &config);
//! assert!(report.classified() <= report.valid);
//! ```

mod config;
mod monte_carlo;
mod report;
mod sampler;

pub use config::{EstimateBuilder, EstimateConfig, DEFAULT_TRIALS};
pub use monte_carlo::{estimate, estimate_relations, estimate_with, Estimate};
pub use report::EstimateReport;
pub use sampler::{simulate, simulate_bounded, Walk};
