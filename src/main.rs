use fieldops_search::{
    api::{build_router, AppState},
    config::Config,
    search::SearchAggregator,
    sources::{ErpCustomerClient, InMemoryFieldStore},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldops_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        default_config()
    });

    tracing::info!("Starting {} v{}", config.observability.service_name, env!("CARGO_PKG_VERSION"));
    tracing::info!(base_url = %config.erp.base_url, "ERP customer directory configured");

    // Customer directory (external ERP pass-through)
    let erp_client = ErpCustomerClient::new(&config.erp)?;

    // Document store. The in-memory store is the MVP backend; a managed
    // NoSQL implementation plugs in behind the same FieldStore trait.
    let store = InMemoryFieldStore::new();

    let aggregator = Arc::new(SearchAggregator::new(
        Arc::new(erp_client),
        Arc::new(store),
        config.search.clone(),
    ));
    tracing::info!(
        quick_limit = config.search.quick_limit,
        quick_worker_page = config.search.quick_worker_page,
        "Search aggregator initialized"
    );

    // Build HTTP router
    let app = build_router(AppState::new(aggregator));

    let http_addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    tracing::info!("HTTP API server listening on http://{}", http_addr);
    tracing::info!("   Health check: http://{}/health", http_addr);
    tracing::info!("   Search API:   http://{}/v1/search?q=<query>&mode=quick|full", http_addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}

fn default_config() -> Config {
    use fieldops_search::config::*;
    use fieldops_search::search::AggregatorConfig;

    Config {
        server: ServerConfig {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
            request_timeout_secs: 30,
        },
        erp: ErpConfig {
            base_url: "http://localhost:9100".to_string(),
            timeout_secs: 10,
        },
        search: AggregatorConfig::default(),
        observability: ObservabilityConfig {
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "fieldops-search".to_string(),
        },
    }
}
