//! Allen Automata: weighted automata for estimating interval relations
//!
//! Two intervals are modelled as independent stochastic processes, each a
//! small weighted automaton that is born (`l`) and later dies (`r`). Their
//! asynchronous product, gated by a linear clock, is sampled many times and
//! each sampled endpoint ordering is classified into one of Allen's thirteen
//! interval relations.
//!
//! # Core Concepts
//!
//! - **Automaton**: labeled states with per-symbol weighted transitions
//! - **Superposition**: the product of two automata, optionally clocked
//! - **Sampling**: weighted random walks and Monte Carlo aggregation
//! - **Classification**: endpoint orderings mapped to Allen relations
//!
//! # Example
//!
//! ```rust
//! use allen_automata::allen::classify;
//! use allen_automata::builder::interval_automaton;
//! use allen_automata::clock::build_clock;
//! use allen_automata::product::{superpose, Composition};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let a = interval_automaton("a", 0.5, 0.5).unwrap();
//! let b = interval_automaton("b", 0.5, 0.5).unwrap();
//! let clocked = superpose(&a, &b)
//!     .unwrap()
//!     .superpose(&build_clock(25).unwrap(), Composition::Clocked)
//!     .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let walk = allen_automata::simulation::simulate(&clocked, &mut rng);
//! if walk.valid {
//!     let _relation = classify(&walk.symbols);
//! }
//! ```

pub mod allen;
pub mod builder;
pub mod clock;
pub mod combinatorics;
pub mod core;
pub mod product;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use allen::{classify, AllenRelation, RelationCounts};
pub use clock::build_clock;
pub use crate::core::{Automaton, AutomatonError, State, StateId};
pub use product::{superpose, superpose_with, Composition};
pub use simulation::{estimate_relations, EstimateConfig, EstimateReport, Walk};
