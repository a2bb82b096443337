//! Federated data sources.
//!
//! The aggregator never talks to a concrete backend directly; it goes
//! through two seams:
//!
//! - [`CustomerDirectory`] — the external ERP pass-through that performs
//!   server-side customer search
//! - [`FieldStore`] — the document store holding workers, jobs (with nested
//!   follow-ups) and top-level follow-ups

mod erp;
mod memory;

pub use erp::ErpCustomerClient;
pub use memory::InMemoryFieldStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CustomerRecord, FollowUpRecord, JobRecord, WorkerRecord};

/// External ERP customer lookup.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Server-side customer search.
    ///
    /// The remote service filters on its own terms; its matching semantics
    /// are not trusted to be identical to ours, so callers re-filter the
    /// returned records client-side.
    async fn search_customers(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CustomerRecord>>;
}

/// Document store reads used by the aggregator.
#[async_trait]
pub trait FieldStore: Send + Sync {
    /// All workers, optionally page-limited (quick search reads one page).
    async fn list_workers(&self, limit: Option<usize>) -> Result<Vec<WorkerRecord>>;

    /// All jobs, optionally restricted to jobs with at least one follow-up.
    async fn list_jobs(&self, with_follow_ups_only: bool) -> Result<Vec<JobRecord>>;

    /// The top-level follow-up collection.
    async fn list_follow_ups(&self) -> Result<Vec<FollowUpRecord>>;
}
