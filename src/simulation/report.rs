//! Summary of a Monte Carlo relation estimate.

use crate::allen::{AllenRelation, RelationCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of [`estimate_relations`](super::estimate_relations).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Unique run identifier
    pub id: String,

    /// Name of the sampled automaton
    pub automaton: String,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Walks sampled, valid or not
    pub trials: usize,

    /// Walks that reached a final state
    pub valid: usize,

    /// Relation tallies over the valid walks
    pub counts: RelationCounts,
}

impl EstimateReport {
    /// Walks dropped for ending on a dead end or the step bound.
    pub fn invalid(&self) -> usize {
        self.trials.saturating_sub(self.valid)
    }

    /// Valid walks that mapped to some relation.
    pub fn classified(&self) -> usize {
        self.counts.total()
    }

    /// Valid walks whose endpoint ordering has no relation.
    pub fn unclassified(&self) -> usize {
        self.counts.unclassified()
    }

    /// Empirical probability of `relation` among classified walks.
    pub fn frequency(&self, relation: AllenRelation) -> f64 {
        self.counts.frequency(relation)
    }

    /// Empirical distribution over all thirteen relations.
    pub fn distribution(&self) -> Vec<(AllenRelation, f64)> {
        AllenRelation::ALL
            .into_iter()
            .map(|relation| (relation, self.frequency(relation)))
            .collect()
    }

    /// Wall-clock time the run took.
    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> EstimateReport {
        let mut counts = RelationCounts::new();
        counts.record(&["la", "ra", "lb", "rb"]);
        counts.record(&["la", "ra", "lb", "rb"]);
        counts.record(&["la", "lb", "ra", "rb"]);
        counts.record(&["t"]);

        let started_at = Utc::now();
        EstimateReport {
            id: "run-1".to_string(),
            automaton: "A x B x clock".to_string(),
            started_at,
            finished_at: started_at + chrono::Duration::milliseconds(250),
            trials: 10,
            valid: 4,
            counts,
        }
    }

    #[test]
    fn derived_totals() {
        let report = sample_report();
        assert_eq!(report.invalid(), 6);
        assert_eq!(report.classified(), 3);
        assert_eq!(report.unclassified(), 1);
        assert_eq!(report.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn distribution_covers_all_relations() {
        let report = sample_report();
        let distribution = report.distribution();

        assert_eq!(distribution.len(), 13);
        let total: f64 = distribution.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((report.frequency(AllenRelation::Precedes) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn report_roundtrips_through_json() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"precedes\": 2"));

        let restored: EstimateReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn inconsistent_report_has_no_invalid_walks() {
        let report = EstimateReport {
            trials: 2,
            valid: 4,
            ..sample_report()
        };
        assert_eq!(report.invalid(), 0);
    }
}
