//! API middleware layers.
//!
//! Provides the panic handler that turns a crashed handler into the generic
//! 500 body instead of a dropped connection.

use std::any::Any;

use axum::response::Response;
use tracing::error;

use super::envelope::ApiErrorResponse;

/// `CatchPanicLayer` handler: log the panic payload, return the generic 500.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    error!(panic = %detail, "Request handler panicked");
    ApiErrorResponse::internal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn boom() -> &'static str {
        panic!("table index out of bounds")
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let resp = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "Internal server error");
        assert!(!v.to_string().contains("table index"));
    }
}
