//! HTTP API handlers

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use wayfinder_core::{NavigationError, NavigationRoute, NavigationService};

use crate::config::ServerConfig;

/// Navigation service shared by all requests; read-only after startup
pub type SharedService = Arc<NavigationService>;

/// Build the Axum router
pub fn build_router(service: SharedService, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/qr/lookup", get(lookup_qr))
        .route("/api/path", get(find_path))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests))
                .layer(cors),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    InvalidInput(&'static str),
    Navigation(NavigationError),
}

impl From<NavigationError> for ApiError {
    fn from(err: NavigationError) -> Self {
        ApiError::Navigation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Navigation(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(%status, %error, "request rejected");
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Treats an empty query value like a missing one
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============ Marker Lookup ============

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    qr_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LandmarkResponse {
    pub landmark: String,
}

async fn lookup_qr(
    State(service): State<SharedService>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LandmarkResponse>, ApiError> {
    let qr_id =
        required(params.qr_id).ok_or(ApiError::InvalidInput("Missing qr_id parameter"))?;

    let landmark = service.resolve_landmark(&qr_id)?.to_string();
    Ok(Json(LandmarkResponse { landmark }))
}

// ============ Path Endpoint ============

#[derive(Debug, Deserialize)]
pub struct PathParams {
    start_qr: Option<String>,
    end_landmark: Option<String>,
}

async fn find_path(
    State(service): State<SharedService>,
    Query(params): Query<PathParams>,
) -> Result<Json<NavigationRoute>, ApiError> {
    let (Some(start_qr), Some(end_landmark)) =
        (required(params.start_qr), required(params.end_landmark))
    else {
        return Err(ApiError::InvalidInput("Missing start_qr or end_landmark"));
    };

    let route = service.compute_route(&start_qr, &end_landmark)?;
    Ok(Json(route))
}

// ============ Health ============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub nodes: usize,
    pub edges: usize,
}

async fn health(State(service): State<SharedService>) -> Json<HealthResponse> {
    let graph = service.graph();
    Json(HealthResponse {
        status: "ok",
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}
