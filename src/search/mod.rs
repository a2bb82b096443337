//! Federated search over the portal's heterogeneous sources.
//!
//! A single free-text query fans out to the external ERP customer directory
//! and three document collections (workers, jobs with nested follow-ups, and
//! top-level follow-ups), then merges everything into one bounded,
//! priority-ordered result set:
//!
//! - **Substring matching**: case-insensitive, OR across a fixed per-type
//!   field list; no fuzzy matching, no relevance score
//! - **Highlighting**: matched substrings wrapped in sentinel markers,
//!   styled by the presentation layer at render time
//! - **Deduplication**: worker hits deduplicated by id within a call
//! - **Ordering**: stable sort on fixed type priority (customer, worker,
//!   job, follow-up)
//! - **Scopes**: quick (type-ahead, capped, reduced source scope) and full
//!   (results page, exhaustive)
//! - **Degradation**: per-source failures produce a typed partial outcome
//!   instead of an error
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use fieldops_search::config::ErpConfig;
//! use fieldops_search::search::{AggregatorConfig, SearchAggregator, SearchScope};
//! use fieldops_search::sources::{ErpCustomerClient, InMemoryFieldStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let erp = ErpCustomerClient::new(&ErpConfig {
//!         base_url: "http://erp.local:9100".to_string(),
//!         timeout_secs: 10,
//!     })?;
//!     let store = InMemoryFieldStore::new();
//!
//!     let aggregator = SearchAggregator::new(
//!         Arc::new(erp),
//!         Arc::new(store),
//!         AggregatorConfig::default(),
//!     );
//!
//!     let outcome = aggregator.search("acme", SearchScope::Quick).await;
//!     let response = outcome.response_or_empty();
//!     println!("{} results", response.total_count);
//!
//!     Ok(())
//! }
//! ```

mod aggregator;
mod config;
mod error;
mod highlight;
mod query;
mod result;

pub use aggregator::SearchAggregator;
pub use config::{AggregatorConfig, AggregatorConfigBuilder};
pub use error::{SearchError, SearchResult, SourceKind};
pub use highlight::{strip_highlight, strip_markup, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use query::{SearchQuery, SearchScope};
pub use result::{ResultKind, SearchHit, SearchOutcome, SearchResponse, TypeCounts};
