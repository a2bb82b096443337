//! Common test fixtures for the federated search suites.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use fieldops_search::error::{AppError, Result};
use fieldops_search::models::{
    CustomerRecord, FollowUpRecord, JobFollowUp, JobRecord, WorkerRecord,
};
use fieldops_search::search::{AggregatorConfig, SearchAggregator};
use fieldops_search::sources::{CustomerDirectory, FieldStore, InMemoryFieldStore};

/// Customer directory stub serving a fixed record set.
///
/// Mimics the untrusted remote: it returns its records for every query
/// (no server-side filtering), honoring only the limit parameter. The
/// aggregator's client-side re-filter has to do the real matching.
pub struct StaticCustomerDirectory {
    pub customers: Vec<CustomerRecord>,
}

#[async_trait]
impl CustomerDirectory for StaticCustomerDirectory {
    async fn search_customers(
        &self,
        _query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CustomerRecord>> {
        let mut customers = self.customers.clone();
        if let Some(limit) = limit {
            customers.truncate(limit);
        }
        Ok(customers)
    }
}

/// Customer directory stub that always fails.
pub struct FailingCustomerDirectory;

#[async_trait]
impl CustomerDirectory for FailingCustomerDirectory {
    async fn search_customers(
        &self,
        _query: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<CustomerRecord>> {
        Err(AppError::Network("connection refused".to_string()))
    }
}

/// Field store stub where every read fails.
pub struct FailingFieldStore;

#[async_trait]
impl FieldStore for FailingFieldStore {
    async fn list_workers(&self, _limit: Option<usize>) -> Result<Vec<WorkerRecord>> {
        Err(AppError::Store("workers collection unavailable".to_string()))
    }

    async fn list_jobs(&self, _with_follow_ups_only: bool) -> Result<Vec<JobRecord>> {
        Err(AppError::Store("jobs collection unavailable".to_string()))
    }

    async fn list_follow_ups(&self) -> Result<Vec<FollowUpRecord>> {
        Err(AppError::Store("follow-ups collection unavailable".to_string()))
    }
}

pub fn customer(code: &str, name: &str) -> CustomerRecord {
    CustomerRecord {
        code: code.to_string(),
        name: name.to_string(),
        phone: "+44 23 9200 0000".to_string(),
        email: format!("contact@{}.test", code.to_lowercase()),
        street: "12 Harbor Rd".to_string(),
        block: String::new(),
        city: "Portsmouth".to_string(),
        zip_code: "PO1 3AX".to_string(),
        contract_flag: true,
    }
}

pub fn worker(id: &str, full_name: &str) -> WorkerRecord {
    WorkerRecord {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: format!("{}@fieldops.test", id),
        role: "technician".to_string(),
        profile_picture: None,
    }
}

pub fn job(id: &str, job_name: &str, customer_name: &str) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        job_name: job_name.to_string(),
        job_id: format!("JOB-{}", id.to_uppercase()),
        customer_name: customer_name.to_string(),
        status: "open".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        follow_ups: Vec::new(),
    }
}

pub fn job_follow_up(id: &str, title: &str, notes: &str) -> JobFollowUp {
    JobFollowUp {
        id: id.to_string(),
        title: title.to_string(),
        kind: "callback".to_string(),
        status: "pending".to_string(),
        notes: notes.to_string(),
        due_date: Some(Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()),
    }
}

pub fn follow_up(id: &str, title: &str, notes: &str) -> FollowUpRecord {
    FollowUpRecord {
        id: id.to_string(),
        title: title.to_string(),
        kind: "inspection".to_string(),
        status: "open".to_string(),
        notes: notes.to_string(),
        due_date: Some(Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap()),
    }
}

/// Aggregator wired to a static directory and the given store.
pub fn aggregator_with(
    customers: Vec<CustomerRecord>,
    store: InMemoryFieldStore,
) -> SearchAggregator {
    SearchAggregator::new(
        Arc::new(StaticCustomerDirectory { customers }),
        Arc::new(store),
        AggregatorConfig::default(),
    )
}
