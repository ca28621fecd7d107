//! Repeated sampling and aggregation.
//!
//! Trials are independent, so they can be fanned out across rayon workers.
//! Each parallel trial `i` draws from its own `StdRng` seeded with
//! `seed + i`; tallies are combined by summing counts. Serial runs share a
//! single generator, so serial and parallel runs with the same seed sample
//! different walks.

use super::config::EstimateConfig;
use super::report::EstimateReport;
use super::sampler::{simulate_bounded, Walk};
use crate::allen::RelationCounts;
use crate::core::Automaton;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

/// Valid walks collected from a batch of trials.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    /// Walks attempted
    pub trials: usize,
    /// Symbol sequences of the walks that reached a final state
    pub paths: Vec<Vec<String>>,
}

impl Estimate {
    pub fn valid(&self) -> usize {
        self.paths.len()
    }

    pub fn invalid(&self) -> usize {
        self.trials.saturating_sub(self.paths.len())
    }

    /// Classify every surviving path.
    pub fn relation_counts(&self) -> RelationCounts {
        RelationCounts::from_paths(&self.paths)
    }
}

/// Run `trials` unseeded walks and keep the valid ones.
pub fn estimate(automaton: &Automaton, trials: usize) -> Estimate {
    let config = EstimateConfig::builder().trials(trials).build();
    estimate_with(automaton, &config)
}

/// Run the walks described by `config` and keep the valid ones.
///
/// Invalid walks are dropped, not resampled.
pub fn estimate_with(automaton: &Automaton, config: &EstimateConfig) -> Estimate {
    let paths = run_trials(automaton, config)
        .into_iter()
        .filter(|walk| walk.valid)
        .map(|walk| walk.symbols)
        .collect();

    Estimate {
        trials: config.trials,
        paths,
    }
}

fn run_trials(automaton: &Automaton, config: &EstimateConfig) -> Vec<Walk> {
    if config.parallel {
        let base = base_seed(config);
        (0..config.trials)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(base.wrapping_add(i as u64));
                simulate_bounded(automaton, &mut rng, config.max_steps)
            })
            .collect()
    } else {
        let mut rng = serial_rng(config);
        (0..config.trials)
            .map(|_| simulate_bounded(automaton, &mut rng, config.max_steps))
            .collect()
    }
}

fn base_seed(config: &EstimateConfig) -> u64 {
    config.seed.unwrap_or_else(|| rand::thread_rng().gen())
}

fn serial_rng(config: &EstimateConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Running totals for one worker.
#[derive(Default)]
struct Tally {
    valid: usize,
    counts: RelationCounts,
}

impl Tally {
    fn observe(mut self, walk: Walk) -> Self {
        if walk.valid {
            self.valid += 1;
            self.counts.record(&walk.symbols);
        }
        self
    }

    fn combine(mut self, other: Tally) -> Self {
        self.valid += other.valid;
        self.counts.merge(&other.counts);
        self
    }
}

/// Sample the automaton and tally the Allen relation of every valid walk.
///
/// Paths are classified as they are produced and never stored, so memory
/// use does not grow with the trial count.
pub fn estimate_relations(automaton: &Automaton, config: &EstimateConfig) -> EstimateReport {
    let started_at = Utc::now();

    let tally = if config.parallel {
        let base = base_seed(config);
        (0..config.trials)
            .into_par_iter()
            .fold(Tally::default, |tally, i| {
                let mut rng = StdRng::seed_from_u64(base.wrapping_add(i as u64));
                tally.observe(simulate_bounded(automaton, &mut rng, config.max_steps))
            })
            .reduce(Tally::default, Tally::combine)
    } else {
        let mut rng = serial_rng(config);
        (0..config.trials).fold(Tally::default(), |tally, _| {
            tally.observe(simulate_bounded(automaton, &mut rng, config.max_steps))
        })
    };

    let report = EstimateReport {
        id: Uuid::new_v4().to_string(),
        automaton: automaton.name().to_string(),
        started_at,
        finished_at: Utc::now(),
        trials: config.trials,
        valid: tally.valid,
        counts: tally.counts,
    };

    if config.trials > 0 && report.valid == 0 {
        warn!(
            automaton = %report.automaton,
            trials = report.trials,
            "no walk reached a final state"
        );
    }
    info!(
        automaton = %report.automaton,
        trials = report.trials,
        valid = report.valid,
        classified = report.classified(),
        unclassified = report.unclassified(),
        elapsed_ms = report.elapsed().as_millis() as u64,
        "relation estimate finished"
    );

    report
}
