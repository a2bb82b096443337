//! Error types for search operations

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// The federated sources an aggregation call fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    /// External ERP customer directory
    Customers,
    /// Worker collection
    Workers,
    /// Job collection (also yields job-nested follow-ups)
    Jobs,
    /// Top-level follow-up collection
    FollowUps,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Customers => "customers",
            SourceKind::Workers => "workers",
            SourceKind::Jobs => "jobs",
            SourceKind::FollowUps => "followUps",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during search aggregation
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Every federated source failed
    #[error("All search sources failed")]
    AllSourcesFailed,

    /// The highlight pattern could not be compiled from the query
    #[error("Query pattern error: {0}")]
    QueryPattern(String),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::QueryPattern(msg) => AppError::Validation(msg),
            _ => AppError::Internal(err.to_string()),
        }
    }
}
