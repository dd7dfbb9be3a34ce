//! Service state endpoints: health and index

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ApiState;

// ============================================================================
// Health Endpoint
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

/// GET /health - Liveness probe
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_secs(),
        timestamp: Utc::now(),
    })
}

// ============================================================================
// Index Endpoint
// ============================================================================

/// Endpoints advertised by the index route.
pub const ENDPOINTS: [&str; 6] = [
    "POST /api/recommend-by-village",
    "POST /api/recommend-by-coordinates",
    "GET /api/agro-zones",
    "GET /api/supported-crops",
    "GET /api/model-info",
    "GET /health",
];

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET / - Service banner
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "CropSmart AI Backend API",
        status: "running",
        endpoints: &ENDPOINTS,
    })
}
