//! Aggregation configuration

use serde::{Deserialize, Serialize};

/// Search aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Maximum results returned by a quick (type-ahead) search
    #[serde(default = "default_quick_limit")]
    pub quick_limit: usize,

    /// Worker page size read by a quick search. A worker outside this page
    /// is invisible to quick search even when it matches; the full search
    /// path is the correctness fallback.
    #[serde(default = "default_quick_worker_page")]
    pub quick_worker_page: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            quick_limit: default_quick_limit(),
            quick_worker_page: default_quick_worker_page(),
        }
    }
}

fn default_quick_limit() -> usize {
    10
}

fn default_quick_worker_page() -> usize {
    50
}

/// Builder for AggregatorConfig
pub struct AggregatorConfigBuilder {
    config: AggregatorConfig,
}

impl AggregatorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AggregatorConfig::default(),
        }
    }

    pub fn quick_limit(mut self, limit: usize) -> Self {
        self.config.quick_limit = limit;
        self
    }

    pub fn quick_worker_page(mut self, page: usize) -> Self {
        self.config.quick_worker_page = page;
        self
    }

    pub fn build(self) -> AggregatorConfig {
        self.config
    }
}

impl Default for AggregatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
