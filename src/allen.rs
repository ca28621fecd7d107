//! Allen interval relations and classification of sampled paths.
//!
//! A sampled path from the clocked product is a sequence of symbols such as
//! `["t", "la,t", "lb,t", "t", "ra,rb,t"]`. Classification strips the clock
//! ticks, keeps only endpoint tokens (`la`, `lb`, `ra`, `rb` and the four
//! simultaneous pairs), joins what is left with `_` and looks the key up in
//! the table of thirteen canonical endpoint orderings.

use crate::clock::CLOCK_SYMBOL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Endpoint tokens that survive normalization.
pub const ENDPOINT_TOKENS: [&str; 8] = [
    "la", "lb", "ra", "rb", "la,lb", "la,rb", "ra,lb", "ra,rb",
];

/// One of Allen's thirteen relations between intervals A and B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllenRelation {
    Precedes,
    IsPrecededBy,
    Meets,
    MeetsInverse,
    Overlaps,
    OverlapsInverse,
    Starts,
    StartsInverse,
    During,
    DuringInverse,
    Finishes,
    FinishesInverse,
    Equals,
}

impl AllenRelation {
    pub const ALL: [AllenRelation; 13] = [
        Self::Precedes,
        Self::IsPrecededBy,
        Self::Meets,
        Self::MeetsInverse,
        Self::Overlaps,
        Self::OverlapsInverse,
        Self::Starts,
        Self::StartsInverse,
        Self::During,
        Self::DuringInverse,
        Self::Finishes,
        Self::FinishesInverse,
        Self::Equals,
    ];

    /// Canonical endpoint ordering for this relation, A relative to B.
    pub fn key(self) -> &'static str {
        match self {
            Self::Precedes => "la_ra_lb_rb",
            Self::IsPrecededBy => "lb_rb_la_ra",
            Self::Meets => "la_ra,lb_rb",
            Self::MeetsInverse => "lb_la,rb_ra",
            Self::Overlaps => "la_lb_ra_rb",
            Self::OverlapsInverse => "lb_la_rb_ra",
            Self::Starts => "la,lb_ra_rb",
            Self::StartsInverse => "la,lb_rb_ra",
            Self::During => "lb_la_ra_rb",
            Self::DuringInverse => "la_lb_rb_ra",
            Self::Finishes => "lb_la_ra,rb",
            Self::FinishesInverse => "la_lb_ra,rb",
            Self::Equals => "la,lb_ra,rb",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Precedes => "precedes",
            Self::IsPrecededBy => "is-preceded-by",
            Self::Meets => "meets",
            Self::MeetsInverse => "meets-inverse",
            Self::Overlaps => "overlaps",
            Self::OverlapsInverse => "overlaps-inverse",
            Self::Starts => "starts",
            Self::StartsInverse => "starts-inverse",
            Self::During => "during",
            Self::DuringInverse => "during-inverse",
            Self::Finishes => "finishes",
            Self::FinishesInverse => "finishes-inverse",
            Self::Equals => "equals",
        }
    }

    /// The relation obtained by swapping A and B.
    pub fn inverse(self) -> Self {
        match self {
            Self::Precedes => Self::IsPrecededBy,
            Self::IsPrecededBy => Self::Precedes,
            Self::Meets => Self::MeetsInverse,
            Self::MeetsInverse => Self::Meets,
            Self::Overlaps => Self::OverlapsInverse,
            Self::OverlapsInverse => Self::Overlaps,
            Self::Starts => Self::StartsInverse,
            Self::StartsInverse => Self::Starts,
            Self::During => Self::DuringInverse,
            Self::DuringInverse => Self::During,
            Self::Finishes => Self::FinishesInverse,
            Self::FinishesInverse => Self::Finishes,
            Self::Equals => Self::Equals,
        }
    }

    /// Look up a normalized `_`-joined key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|relation| relation.key() == key)
    }
}

impl fmt::Display for AllenRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip clock ticks from each symbol and keep only endpoint tokens.
///
/// `"la,t"` becomes `"la"`, a bare `"t"` disappears, and anything outside
/// [`ENDPOINT_TOKENS`] is dropped. Order is preserved.
pub fn normalize<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter()
        .map(|symbol| {
            symbol
                .as_ref()
                .split(',')
                .filter(|part| *part != CLOCK_SYMBOL)
                .collect::<Vec<_>>()
                .join(",")
        })
        .filter(|token| ENDPOINT_TOKENS.contains(&token.as_str()))
        .collect()
}

/// Classify a sampled path, or `None` when it has no Allen relation.
///
/// # Example
///
/// ```
/// use allen_automata::allen::{classify, AllenRelation};
///
/// let path = ["t", "la,t", "t", "lb,t", "ra,rb,t"];
/// assert_eq!(classify(&path), Some(AllenRelation::FinishesInverse));
/// assert_eq!(classify(&["t", "t"]), None);
/// ```
pub fn classify<S: AsRef<str>>(path: &[S]) -> Option<AllenRelation> {
    AllenRelation::from_key(&normalize(path).join("_"))
}

/// Per-relation tallies over many classified paths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationCounts {
    counts: BTreeMap<AllenRelation, usize>,
    unclassified: usize,
}

impl RelationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `path` and tally the outcome.
    pub fn record<S: AsRef<str>>(&mut self, path: &[S]) -> Option<AllenRelation> {
        let relation = classify(path);
        match relation {
            Some(relation) => *self.counts.entry(relation).or_insert(0) += 1,
            None => self.unclassified += 1,
        }
        relation
    }

    /// Tally every path in `paths`.
    pub fn from_paths<P: AsRef<[String]>>(paths: &[P]) -> Self {
        let mut counts = Self::new();
        for path in paths {
            counts.record(path.as_ref());
        }
        counts
    }

    pub fn get(&self, relation: AllenRelation) -> usize {
        self.counts.get(&relation).copied().unwrap_or(0)
    }

    /// Number of paths that mapped to some relation.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of paths excluded for lacking a relation.
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    /// Share of classified paths that fell into `relation`.
    pub fn frequency(&self, relation: AllenRelation) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(relation) as f64 / total as f64,
        }
    }

    /// Relations with a nonzero count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AllenRelation, usize)> + '_ {
        self.counts.iter().map(|(relation, count)| (*relation, *count))
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &RelationCounts) {
        for (relation, count) in other.iter() {
            *self.counts.entry(relation).or_insert(0) += count;
        }
        self.unclassified += other.unclassified;
    }
}
