use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dispatch job document.
///
/// Follow-ups created against a job live inside the job document as a child
/// collection keyed by generated ids. Iteration order is insertion order;
/// nothing here depends on map key-enumeration semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    /// Document id
    pub id: String,

    /// Job display name
    pub job_name: String,

    /// Human-readable job number (e.g. "JOB-2024-0117")
    pub job_id: String,

    /// Name of the customer the job was dispatched for
    #[serde(default)]
    pub customer_name: String,

    /// Workflow status (free-form, owned by the portal)
    #[serde(default)]
    pub status: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Nested follow-ups, in insertion order
    #[serde(default)]
    pub follow_ups: Vec<JobFollowUp>,
}

impl JobRecord {
    pub fn follow_up_count(&self) -> usize {
        self.follow_ups.len()
    }
}

/// A follow-up embedded in a job document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFollowUp {
    /// Generated id, unique within the parent job
    pub id: String,

    /// Follow-up title or type label
    pub title: String,

    /// Category (e.g. "callback", "warranty", "inspection")
    #[serde(default)]
    pub kind: String,

    /// Workflow status
    #[serde(default)]
    pub status: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the follow-up is due, if scheduled
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}
