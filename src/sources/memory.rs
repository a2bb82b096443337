use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{FollowUpRecord, JobFollowUp, JobRecord, WorkerRecord};
use crate::sources::FieldStore;

/// In-memory document store (for MVP and testing).
///
/// Collections keep insertion order, so repeated reads return identical
/// arrays and aggregation over unchanged data is idempotent.
#[derive(Clone, Default)]
pub struct InMemoryFieldStore {
    workers: Arc<RwLock<Vec<WorkerRecord>>>,
    jobs: Arc<RwLock<Vec<JobRecord>>>,
    follow_ups: Arc<RwLock<Vec<FollowUpRecord>>>,
}

impl InMemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_worker(&self, worker: WorkerRecord) {
        self.workers.write().push(worker);
    }

    pub fn add_job(&self, job: JobRecord) {
        self.jobs.write().push(job);
    }

    pub fn add_follow_up(&self, follow_up: FollowUpRecord) {
        self.follow_ups.write().push(follow_up);
    }

    /// Append a nested follow-up to an existing job. Returns the generated
    /// entry id, or `None` when the job does not exist.
    pub fn add_job_follow_up(&self, job_id: &str, mut follow_up: JobFollowUp) -> Option<String> {
        let mut jobs = self.jobs.write();
        let job = jobs.iter_mut().find(|job| job.id == job_id)?;

        if follow_up.id.is_empty() {
            follow_up.id = uuid::Uuid::new_v4().to_string();
        }
        let id = follow_up.id.clone();
        job.follow_ups.push(follow_up);
        Some(id)
    }
}

#[async_trait]
impl FieldStore for InMemoryFieldStore {
    async fn list_workers(&self, limit: Option<usize>) -> Result<Vec<WorkerRecord>> {
        let workers = self.workers.read();
        let page = match limit {
            Some(limit) => workers.iter().take(limit).cloned().collect(),
            None => workers.clone(),
        };
        Ok(page)
    }

    async fn list_jobs(&self, with_follow_ups_only: bool) -> Result<Vec<JobRecord>> {
        let jobs = self.jobs.read();
        let selected = jobs
            .iter()
            .filter(|job| !with_follow_ups_only || job.follow_up_count() > 0)
            .cloned()
            .collect();
        Ok(selected)
    }

    async fn list_follow_ups(&self) -> Result<Vec<FollowUpRecord>> {
        Ok(self.follow_ups.read().clone())
    }
}
