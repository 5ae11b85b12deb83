use crate::errors::AppError;
use crate::export::{self, ExportFormat};
use crate::models::{
    ExportRequest, IndustryStats, InitRequest, Lead, LeadListParams, SearchRequest, UserParams,
};
use crate::service::{LeadDatabaseService, DEFAULT_SEARCH_LIMIT};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lead database service over the configured store.
    pub service: Arc<LeadDatabaseService>,
}

/// Reject blank user ids. Auth is a collaborator outside this service, so
/// callers identify themselves explicitly.
fn require_user(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("user_id is required".to_string()));
    }
    Ok(())
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-leaddb-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/leads/init
///
/// Seeds the caller's lead collection. No-op if the collection already holds
/// at least one record.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - JSON body naming the owning user.
///
/// # Returns
///
/// * `Result<Json<serde_json::Value>, AppError>` - Success message or an error.
pub async fn init_database(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InitRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::info!("POST /leads/init - user: {}", request.user_id);
    require_user(&request.user_id)?;

    state.service.initialize_database(&request.user_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Lead database ready",
    })))
}

/// POST /api/v1/leads/search
///
/// Filtered, score-ranked search over the caller's leads.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - JSON body with the owning user and filter criteria.
///
/// # Returns
///
/// * `Result<Json<Vec<Lead>>, AppError>` - Matching leads or an error.
pub async fn search_leads(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<Lead>>, AppError> {
    tracing::info!(
        "POST /leads/search - user: {}, criteria: {:?}",
        request.user_id,
        request.criteria
    );
    require_user(&request.user_id)?;

    let leads = state
        .service
        .search_leads(&request.criteria, &request.user_id)
        .await?;

    tracing::info!("Search returned {} leads", leads.len());
    Ok(Json(leads))
}

/// GET /api/v1/leads/industry/:industry
pub async fn leads_by_industry(
    State(state): State<Arc<AppState>>,
    Path(industry): Path<String>,
    Query(params): Query<LeadListParams>,
) -> Result<Json<Vec<Lead>>, AppError> {
    tracing::info!(
        "GET /leads/industry/{} - user: {}",
        industry,
        params.user_id
    );
    require_user(&params.user_id)?;

    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let leads = state
        .service
        .leads_by_industry(&industry, &params.user_id, limit)
        .await?;

    Ok(Json(leads))
}

/// GET /api/v1/leads/high-value
pub async fn high_value_leads(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeadListParams>,
) -> Result<Json<Vec<Lead>>, AppError> {
    tracing::info!("GET /leads/high-value - user: {}", params.user_id);
    require_user(&params.user_id)?;

    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let leads = state
        .service
        .high_value_leads(&params.user_id, limit)
        .await?;

    Ok(Json(leads))
}

/// GET /api/v1/leads/stats
///
/// Per-industry aggregates over the caller's collection, largest group first.
pub async fn industry_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<IndustryStats>>, AppError> {
    tracing::info!("GET /leads/stats - user: {}", params.user_id);
    require_user(&params.user_id)?;

    let stats = state.service.industry_stats(&params.user_id).await?;
    Ok(Json(stats))
}

/// GET /api/v1/leads/count
///
/// Nominal size of the full lead universe. Display-only figure.
pub async fn total_leads_count(
    State(state): State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "total_leads": state.service.total_leads_count(),
    }))
}

/// POST /api/v1/leads/export
///
/// Runs a search and returns the result set serialized as CSV or JSON, with
/// the matching content type.
pub async fn export_leads(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    tracing::info!(
        "POST /leads/export - user: {}, format: {}",
        request.user_id,
        request.format
    );
    require_user(&request.user_id)?;
    let format = ExportFormat::parse(&request.format)?;

    let leads = state
        .service
        .search_leads(&request.criteria, &request.user_id)
        .await?;
    let body = export::render(&leads, format)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response())
}
