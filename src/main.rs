mod config;
mod db;
mod errors;
mod export;
mod generator;
mod handlers;
mod models;
mod service;
mod store;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::service::{LeadDatabaseService, SeedProfile};
use crate::store::PgLeadStore;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Database connection and schema.
/// - The lead database service over the Postgres store.
/// - HTTP routes and middleware (CORS, Rate Limiting).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_leaddb_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database connection pool and schema
    let db = Database::new(&config.database_url).await?;
    tracing::info!("Database connection pool established");

    // Build the lead database service over the Postgres store
    let store = Arc::new(PgLeadStore::new(db.pool.clone()));
    let seed = SeedProfile {
        target: config.seed_target,
        batch_size: config.seed_batch_size,
        ..SeedProfile::default()
    };
    let service = Arc::new(LeadDatabaseService::with_profile(store, seed));

    // Build application state
    let app_state = Arc::new(handlers::AppState { service });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        .route("/api/v1/leads/init", post(handlers::init_database))
        .route("/api/v1/leads/search", post(handlers::search_leads))
        .route(
            "/api/v1/leads/industry/:industry",
            get(handlers::leads_by_industry),
        )
        .route("/api/v1/leads/high-value", get(handlers::high_value_leads))
        .route("/api/v1/leads/stats", get(handlers::industry_stats))
        .route("/api/v1/leads/count", get(handlers::total_leads_count))
        .route("/api/v1/leads/export", post(handlers::export_leads))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 5MB max payload (prevents memory exhaustion)
                .layer(RequestBodyLimitLayer::new(5 * 1024 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
