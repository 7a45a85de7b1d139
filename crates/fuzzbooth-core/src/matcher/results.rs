//! Match records and result aggregation

use serde::{Deserialize, Serialize};

use crate::error::ComparisonFailure;

/// Outcome for a single phrase occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchRecord {
    /// The phrase does not occur within tolerance
    NotFound { phrase: Vec<String> },
    /// One accepted window of the document
    Found {
        phrase: Vec<String>,
        matched: Vec<String>,
        index: usize,
        distance: f64,
    },
}

impl MatchRecord {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn phrase(&self) -> &[String] {
        match self {
            Self::NotFound { phrase } | Self::Found { phrase, .. } => phrase,
        }
    }

    /// Phrase tokens joined with single spaces
    pub fn search_term(&self) -> String {
        self.phrase().join(" ")
    }

    pub fn matched(&self) -> Option<&[String]> {
        match self {
            Self::Found { matched, .. } => Some(matched),
            Self::NotFound { .. } => None,
        }
    }

    /// Matched document tokens joined with single spaces
    pub fn matched_text(&self) -> Option<String> {
        self.matched().map(|tokens| tokens.join(" "))
    }

    /// Zero-based token index of the first matched token
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Found { index, .. } => Some(*index),
            Self::NotFound { .. } => None,
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Found { distance, .. } => Some(*distance),
            Self::NotFound { .. } => None,
        }
    }
}

/// Whether the scan visited every window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Completeness {
    Complete,
    /// A comparison failed; records before `failure.window` are kept
    Aborted { failure: ComparisonFailure },
    /// The cancellation token fired before `window` was evaluated
    Cancelled { window: usize },
}

/// Ordered records produced by one search.
///
/// A complete scan holds either Found records in ascending index order or a
/// single NotFound record. An incomplete scan holds only the Found records
/// reached before it stopped, and is inconclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    records: Vec<MatchRecord>,
    completeness: Completeness,
}

impl SearchResults {
    pub(crate) fn not_found(phrase: Vec<String>) -> Self {
        Self {
            records: vec![MatchRecord::NotFound { phrase }],
            completeness: Completeness::Complete,
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }

    pub fn completeness(&self) -> &Completeness {
        &self.completeness
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }

    /// True only for a complete scan that found nothing
    pub fn is_not_found(&self) -> bool {
        self.is_complete() && !self.records.iter().any(MatchRecord::is_found)
    }

    pub fn found(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter().filter(|r| r.is_found())
    }

    /// Start indices of all Found records
    pub fn indices(&self) -> Vec<usize> {
        self.records.iter().filter_map(MatchRecord::index).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for SearchResults {
    type Item = MatchRecord;
    type IntoIter = std::vec::IntoIter<MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Collects Found records in scan order and closes the result set
pub(crate) struct ResultAggregator {
    phrase: Vec<String>,
    found: Vec<MatchRecord>,
}

impl ResultAggregator {
    pub(crate) fn new(phrase: Vec<String>) -> Self {
        Self {
            phrase,
            found: Vec::new(),
        }
    }

    /// Record an accepted window. Each record owns fresh copies of its tokens.
    pub(crate) fn push_found<S: AsRef<str>>(&mut self, index: usize, window: &[S], distance: f64) {
        debug_assert!(
            self.found.last().and_then(MatchRecord::index).map_or(true, |last| last < index),
            "windows must be pushed in ascending order"
        );
        self.found.push(MatchRecord::Found {
            phrase: self.phrase.clone(),
            matched: window.iter().map(|t| t.as_ref().to_string()).collect(),
            index,
            distance,
        });
    }

    pub(crate) fn phrase(&self) -> &[String] {
        &self.phrase
    }

    /// Close the scan. NotFound is synthesised only when every window was
    /// evaluated and none matched.
    pub(crate) fn finish(self, completeness: Completeness) -> SearchResults {
        if completeness == Completeness::Complete && self.found.is_empty() {
            return SearchResults::not_found(self.phrase);
        }
        SearchResults {
            records: self.found,
            completeness,
        }
    }
}
