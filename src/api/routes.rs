//! API route definitions
//!
//! - /api/recommend-by-village     - Recommendation from a village name
//! - /api/recommend-by-coordinates - Recommendation from latitude/longitude
//! - /api/agro-zones               - Agro-zone catalogue
//! - /api/supported-crops          - Supported crop list
//! - /api/model-info               - Model metadata

use axum::{routing::{get, post}, Router};

use super::handlers::{self, ApiState};

/// Create all `/api` routes
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/recommend-by-village", post(handlers::recommend_by_village))
        .route("/recommend-by-coordinates", post(handlers::recommend_by_coordinates))
        .route("/agro-zones", get(handlers::agro_zones))
        .route("/supported-crops", get(handlers::supported_crops))
        .route("/model-info", get(handlers::model_info))
        .with_state(state)
}

/// Root-level health and index endpoints
pub fn root_routes(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
