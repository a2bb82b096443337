use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level follow-up document, distinct from job-nested follow-ups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowUpRecord {
    /// Document id
    pub id: String,

    /// Title or type label
    pub title: String,

    /// Category (e.g. "callback", "warranty", "inspection")
    #[serde(default)]
    pub kind: String,

    /// Workflow status
    #[serde(default)]
    pub status: String,

    /// Free-text notes / description
    #[serde(default)]
    pub notes: String,

    /// When the follow-up is due, if scheduled
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}
