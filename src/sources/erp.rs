use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ErpConfig;
use crate::error::{AppError, Result};
use crate::models::CustomerRecord;
use crate::sources::CustomerDirectory;

/// HTTP client for the ERP customer directory pass-through.
///
/// Remote contract: `GET {base_url}/customers?search=<q>[&limit=<n>]`
/// returning `{"customers": [...]}`. A missing or empty `customers` field is
/// an empty result, not an error.
#[derive(Clone)]
pub struct ErpCustomerClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct CustomerSearchPayload {
    #[serde(default)]
    customers: Vec<CustomerRecord>,
}

impl ErpCustomerClient {
    /// Create a new client from configuration.
    pub fn new(config: &ErpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl CustomerDirectory for ErpCustomerClient {
    async fn search_customers(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CustomerRecord>> {
        let url = format!("{}/customers", self.base_url);

        let mut params: Vec<(&str, String)> = vec![("search", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(format!(
                        "Customer search timed out after {} seconds",
                        self.timeout_secs
                    ))
                } else {
                    AppError::Network(format!("Customer search request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                query = %query,
                "Customer directory returned non-success status"
            );
            return Err(AppError::Network(format!(
                "Customer directory returned status {}",
                status
            )));
        }

        let payload: CustomerSearchPayload = response
            .json()
            .await
            .map_err(|e| AppError::Serialization(format!("Malformed customer payload: {}", e)))?;

        debug!(
            query = %query,
            hits = payload.customers.len(),
            "Customer directory responded"
        );

        Ok(payload.customers)
    }
}
