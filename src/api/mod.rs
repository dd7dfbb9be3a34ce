//! REST API module using Axum
//!
//! Provides HTTP endpoints for the CropSmart front end:
//! - `/api/*` recommendation and catalogue endpoints
//! - `/health` and `/` at the root
//! - a JSON 404 for anything else

pub mod envelope;
pub mod handlers;
pub mod middleware;
mod routes;

pub use handlers::ApiState;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, Uri};
use axum::response::Response;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use envelope::ApiErrorResponse;

/// JSON 404 for unmatched paths.
async fn not_found(uri: Uri) -> Response {
    ApiErrorResponse::not_found(format!("No route for {}", uri.path()))
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// `server.cors_origins` (or `CROPSMART_CORS_ORIGINS`) lists the origins
/// allowed during development, e.g. `http://localhost:3000` for the front end.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        return base;
    }

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    tracing::info!(origins = ?origins, "CORS: allowing configured origins");
    base.allow_origin(allowed)
}

/// Create the complete application router.
pub fn create_app(state: ApiState, server: &ServerConfig) -> Router {
    let routes = Router::new()
        .nest("/api", routes::api_routes(state.clone()))
        .merge(routes::root_routes(state))
        .fallback(not_found);

    with_middleware(routes, server)
}

/// Wrap `router` in the service middleware stack: body limit, panic
/// handler, tracing, gzip and CORS.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&server.cors_origins))
}
