//! Unified result shape shared by every federated source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::error::{SearchError, SourceKind};

/// Result category. Doubles as the fixed sort priority for merged output:
/// customers first, then workers, jobs, follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    Customer,
    Worker,
    Job,
    FollowUp,
}

impl ResultKind {
    /// Fixed source-type priority used as the merge sort key.
    pub fn priority(&self) -> u8 {
        match self {
            ResultKind::Customer => 1,
            ResultKind::Worker => 2,
            ResultKind::Job => 3,
            ResultKind::FollowUp => 4,
        }
    }
}

/// A single normalized search hit.
///
/// `title`, `subtitle`, `address` and `email` may carry highlight markers;
/// `raw_title` is always the plain title (used for dedup and by callers that
/// sort or compare without markup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Source-record identifier
    pub id: String,

    /// Result category
    #[serde(rename = "type")]
    pub kind: ResultKind,

    /// Primary display line, highlighted
    pub title: String,

    /// Secondary display line, highlighted
    pub subtitle: String,

    /// Portal route for the record
    pub link: String,

    /// Plain (marker-free) title
    pub raw_title: String,

    /// Human-readable address, highlighted (customers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Contact email, highlighted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone, plain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Workflow status, plain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Relevant timestamp (job creation, follow-up due date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Per-type cardinality of the final result array.
///
/// Computed from what is returned, not from raw per-source hits, so a quick
/// search truncated at its cap reports the truncated counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCounts {
    pub customers: usize,
    pub workers: usize,
    pub jobs: usize,
    pub follow_ups: usize,
}

impl TypeCounts {
    /// Tally the final result array.
    pub fn tally(hits: &[SearchHit]) -> Self {
        let mut counts = TypeCounts::default();
        for hit in hits {
            match hit.kind {
                ResultKind::Customer => counts.customers += 1,
                ResultKind::Worker => counts.workers += 1,
                ResultKind::Job => counts.jobs += 1,
                ResultKind::FollowUp => counts.follow_ups += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.customers + self.workers + self.jobs + self.follow_ups
    }
}

/// Aggregated search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Merged, priority-ordered results
    pub results: Vec<SearchHit>,

    /// Length of `results`
    pub total_count: usize,

    /// Per-type cardinality of `results`
    pub counts: TypeCounts,
}

impl SearchResponse {
    /// Build a response from merged hits, deriving counts and total.
    pub fn from_hits(results: Vec<SearchHit>) -> Self {
        let counts = TypeCounts::tally(&results);
        Self {
            total_count: results.len(),
            counts,
            results,
        }
    }

    /// The degraded/no-op response: no results, zero counts.
    pub fn empty() -> Self {
        Self::from_hits(Vec::new())
    }
}

/// Typed aggregation outcome.
///
/// Callers can distinguish "truly no matches" (`Complete` with an empty
/// response) from "a source degraded" (`Partial`) and "nothing answered"
/// (`Failed`). The HTTP layer keeps the historical fail-open behavior:
/// every variant still renders as a valid, possibly empty, response body.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Every source answered
    Complete(SearchResponse),

    /// Some sources failed; `response` holds what the surviving sources found
    Partial {
        response: SearchResponse,
        failed: Vec<SourceKind>,
    },

    /// No source produced anything usable
    Failed(SearchError),
}

impl SearchOutcome {
    /// Fail-open view: the response, degraded to empty on total failure.
    pub fn response_or_empty(&self) -> SearchResponse {
        match self {
            SearchOutcome::Complete(response) => response.clone(),
            SearchOutcome::Partial { response, .. } => response.clone(),
            SearchOutcome::Failed(_) => SearchResponse::empty(),
        }
    }

    /// Sources that failed during this aggregation call.
    pub fn failed_sources(&self) -> &[SourceKind] {
        match self {
            SearchOutcome::Complete(_) => &[],
            SearchOutcome::Partial { failed, .. } => failed,
            SearchOutcome::Failed(_) => &ALL_SOURCES,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, SearchOutcome::Complete(_))
    }
}

const ALL_SOURCES: [SourceKind; 4] = [
    SourceKind::Customers,
    SourceKind::Workers,
    SourceKind::Jobs,
    SourceKind::FollowUps,
];
