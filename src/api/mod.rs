pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::search::SearchAggregator;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<SearchAggregator>,
}

impl AppState {
    pub fn new(aggregator: Arc<SearchAggregator>) -> Self {
        Self { aggregator }
    }
}
