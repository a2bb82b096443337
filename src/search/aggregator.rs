//! Federated search aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error};

use crate::error::Result;
use crate::models::{CustomerRecord, FollowUpRecord, JobFollowUp, JobRecord, WorkerRecord};
use crate::search::config::AggregatorConfig;
use crate::search::error::{SearchError, SourceKind};
use crate::search::highlight;
use crate::search::query::{SearchQuery, SearchScope};
use crate::search::result::{ResultKind, SearchHit, SearchOutcome, SearchResponse};
use crate::sources::{CustomerDirectory, FieldStore};

/// Fans a free-text query out to every federated source, normalizes the hits
/// into [`SearchHit`]s, and merges them into a priority-ordered response.
///
/// One parameterized routine serves both scopes; the behavioral differences
/// between quick and full search are confined to source retrieval:
///
/// - quick reads one bounded worker page instead of the whole collection
/// - quick scans only jobs that have at least one follow-up
/// - quick truncates the merged output at the configured cap
///
/// Stateless across calls: every call builds fresh accumulators, no cache,
/// no retry.
pub struct SearchAggregator {
    customers: Arc<dyn CustomerDirectory>,
    store: Arc<dyn FieldStore>,
    config: AggregatorConfig,
}

impl SearchAggregator {
    pub fn new(
        customers: Arc<dyn CustomerDirectory>,
        store: Arc<dyn FieldStore>,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            customers,
            store,
            config,
        }
    }

    /// Run one aggregation call.
    ///
    /// Empty or whitespace-only queries short-circuit to an empty complete
    /// response without touching any source. Source failures degrade the
    /// outcome (`Partial`, or `Failed` when every source failed) instead of
    /// propagating.
    pub async fn search(&self, raw_query: &str, scope: SearchScope) -> SearchOutcome {
        let query = match SearchQuery::parse(raw_query) {
            Ok(Some(query)) => query,
            Ok(None) => return SearchOutcome::Complete(SearchResponse::empty()),
            Err(e) => return SearchOutcome::Failed(e),
        };

        debug!(query = query.raw(), scope = ?scope, "Running federated search");

        // The four lookups are independent reads; issue them concurrently.
        let (customers, workers, jobs, follow_ups) = tokio::join!(
            self.collect_customers(&query, scope),
            self.collect_workers(&query, scope),
            self.collect_jobs(&query, scope),
            self.collect_follow_ups(&query),
        );

        let mut results = Vec::new();
        let mut failed = Vec::new();

        for (kind, outcome) in [
            (SourceKind::Customers, customers),
            (SourceKind::Workers, workers),
            (SourceKind::Jobs, jobs),
            (SourceKind::FollowUps, follow_ups),
        ] {
            match outcome {
                Ok(hits) => results.extend(hits),
                Err(e) => {
                    error!(source = %kind, error = %e, "Search source failed, degrading");
                    failed.push(kind);
                }
            }
        }

        if failed.len() == 4 {
            return SearchOutcome::Failed(SearchError::AllSourcesFailed);
        }

        // Stable sort on type priority; ties keep discovery order.
        results.sort_by_key(|hit| hit.kind.priority());

        if scope.is_quick() {
            results.truncate(self.config.quick_limit);
        }

        let response = SearchResponse::from_hits(results);

        if failed.is_empty() {
            SearchOutcome::Complete(response)
        } else {
            SearchOutcome::Partial { response, failed }
        }
    }

    /// Remote customer search plus the defensive client-side re-filter.
    async fn collect_customers(
        &self,
        query: &SearchQuery,
        scope: SearchScope,
    ) -> Result<Vec<SearchHit>> {
        let limit = scope.is_quick().then_some(self.config.quick_limit);
        let records = self.customers.search_customers(query.raw(), limit).await?;

        Ok(records
            .into_iter()
            .filter(|customer| query.matches_customer(customer))
            .map(|customer| customer_hit(query, &customer))
            .collect())
    }

    /// Worker scan, deduplicated by id (first match wins).
    async fn collect_workers(
        &self,
        query: &SearchQuery,
        scope: SearchScope,
    ) -> Result<Vec<SearchHit>> {
        let limit = scope.is_quick().then_some(self.config.quick_worker_page);
        let records = self.store.list_workers(limit).await?;

        let mut seen = HashSet::new();
        let mut hits = Vec::new();
        for worker in records {
            if !query.matches_worker(&worker) {
                continue;
            }
            if !seen.insert(worker.id.clone()) {
                continue;
            }
            hits.push(worker_hit(query, &worker));
        }
        Ok(hits)
    }

    /// Job scan, flattening each job's nested follow-ups into independent
    /// follow-up hits. Quick scope scans only jobs with follow-ups.
    async fn collect_jobs(&self, query: &SearchQuery, scope: SearchScope) -> Result<Vec<SearchHit>> {
        let records = self.store.list_jobs(scope.is_quick()).await?;

        let mut hits = Vec::new();
        for job in &records {
            if query.matches_job(job) {
                hits.push(job_hit(query, job));
            }
            for follow_up in &job.follow_ups {
                if query.matches_job_follow_up(follow_up) {
                    hits.push(nested_follow_up_hit(query, job, follow_up));
                }
            }
        }
        Ok(hits)
    }

    /// Top-level follow-up scan, identical in both scopes.
    async fn collect_follow_ups(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let records = self.store.list_follow_ups().await?;

        Ok(records
            .into_iter()
            .filter(|follow_up| query.matches_follow_up(follow_up))
            .map(|follow_up| follow_up_hit(query, &follow_up))
            .collect())
    }
}

fn join_present(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.trim())
        .collect::<Vec<_>>()
        .join(", ")
}

fn customer_hit(query: &SearchQuery, customer: &CustomerRecord) -> SearchHit {
    let address = customer.display_address();

    SearchHit {
        id: customer.code.clone(),
        kind: ResultKind::Customer,
        title: query.highlight(&customer.name),
        subtitle: query.highlight(&customer.code),
        link: format!("/customers/{}", customer.code),
        raw_title: highlight::strip_markup(&customer.name),
        address: (!address.is_empty()).then(|| query.highlight(&address)),
        email: (!customer.email.is_empty()).then(|| query.highlight(&customer.email)),
        phone: (!customer.phone.is_empty()).then(|| customer.phone.clone()),
        status: customer.contract_flag.then(|| "contract".to_string()),
        date: None,
    }
}

fn worker_hit(query: &SearchQuery, worker: &WorkerRecord) -> SearchHit {
    SearchHit {
        id: worker.id.clone(),
        kind: ResultKind::Worker,
        title: query.highlight(&worker.full_name),
        subtitle: query.highlight(&worker.role),
        link: format!("/workers/{}", worker.id),
        raw_title: highlight::strip_markup(&worker.full_name),
        address: None,
        email: (!worker.email.is_empty()).then(|| query.highlight(&worker.email)),
        phone: None,
        status: None,
        date: None,
    }
}

fn job_hit(query: &SearchQuery, job: &JobRecord) -> SearchHit {
    let subtitle = join_present(&[job.job_id.as_str(), job.customer_name.as_str()]);

    SearchHit {
        id: job.id.clone(),
        kind: ResultKind::Job,
        title: query.highlight(&job.job_name),
        subtitle: query.highlight(&subtitle),
        link: format!("/jobs/{}", job.id),
        raw_title: highlight::strip_markup(&job.job_name),
        address: None,
        email: None,
        phone: None,
        status: (!job.status.is_empty()).then(|| job.status.clone()),
        date: Some(job.created_at),
    }
}

/// Nested follow-ups are tagged with their parent job: the link routes
/// through the job and the subtitle carries the job's customer name.
fn nested_follow_up_hit(query: &SearchQuery, job: &JobRecord, follow_up: &JobFollowUp) -> SearchHit {
    let subtitle = join_present(&[follow_up.notes.as_str(), job.customer_name.as_str()]);

    SearchHit {
        id: follow_up.id.clone(),
        kind: ResultKind::FollowUp,
        title: query.highlight(&follow_up.title),
        subtitle: query.highlight(&subtitle),
        link: format!("/jobs/{}/follow-ups/{}", job.id, follow_up.id),
        raw_title: highlight::strip_markup(&follow_up.title),
        address: None,
        email: None,
        phone: None,
        status: (!follow_up.status.is_empty()).then(|| follow_up.status.clone()),
        date: follow_up.due_date,
    }
}

fn follow_up_hit(query: &SearchQuery, follow_up: &FollowUpRecord) -> SearchHit {
    SearchHit {
        id: follow_up.id.clone(),
        kind: ResultKind::FollowUp,
        title: query.highlight(&follow_up.title),
        subtitle: query.highlight(&follow_up.notes),
        link: format!("/follow-ups/{}", follow_up.id),
        raw_title: highlight::strip_markup(&follow_up.title),
        address: None,
        email: None,
        phone: None,
        status: (!follow_up.status.is_empty()).then(|| follow_up.status.clone()),
        date: follow_up.due_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::InMemoryFieldStore;
    use async_trait::async_trait;
    use chrono::Utc;

    struct StaticDirectory {
        customers: Vec<CustomerRecord>,
    }

    #[async_trait]
    impl CustomerDirectory for StaticDirectory {
        async fn search_customers(
            &self,
            _query: &str,
            _limit: Option<usize>,
        ) -> Result<Vec<CustomerRecord>> {
            Ok(self.customers.clone())
        }
    }

    fn aggregator(customers: Vec<CustomerRecord>, store: InMemoryFieldStore) -> SearchAggregator {
        SearchAggregator::new(
            Arc::new(StaticDirectory { customers }),
            Arc::new(store),
            AggregatorConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        let agg = aggregator(Vec::new(), InMemoryFieldStore::new());

        let outcome = agg.search("   ", SearchScope::Full).await;
        let response = outcome.response_or_empty();

        assert!(!outcome.is_degraded());
        assert!(response.results.is_empty());
        assert_eq!(response.total_count, 0);
    }

    #[tokio::test]
    async fn test_client_side_refilter_drops_untrusted_remote_hits() {
        // The directory returns a record our substring rule rejects.
        let customers = vec![
            CustomerRecord {
                code: "C001".to_string(),
                name: "Acme Facilities".to_string(),
                ..Default::default()
            },
            CustomerRecord {
                code: "C002".to_string(),
                name: "Unrelated Ltd".to_string(),
                ..Default::default()
            },
        ];
        let agg = aggregator(customers, InMemoryFieldStore::new());

        let response = agg.search("acme", SearchScope::Full).await.response_or_empty();

        assert_eq!(response.total_count, 1);
        assert_eq!(response.results[0].id, "C001");
    }

    #[tokio::test]
    async fn test_nested_follow_up_is_tagged_with_parent_job() {
        let store = InMemoryFieldStore::new();
        store.add_job(JobRecord {
            id: "j1".to_string(),
            job_name: "Boiler service".to_string(),
            job_id: "JOB-1".to_string(),
            customer_name: "Acme Facilities".to_string(),
            created_at: Utc::now(),
            follow_ups: vec![JobFollowUp {
                id: "f1".to_string(),
                title: "Warranty check".to_string(),
                notes: "Check the warranty seal".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });
        let agg = aggregator(Vec::new(), store);

        let response = agg
            .search("warranty", SearchScope::Full)
            .await
            .response_or_empty();

        assert_eq!(response.counts.follow_ups, 1);
        let hit = &response.results[0];
        assert_eq!(hit.link, "/jobs/j1/follow-ups/f1");
        assert!(hit.subtitle.contains("Acme Facilities"));
    }
}
