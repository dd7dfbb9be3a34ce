//! Recommendation endpoints

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ApiState;
use crate::recommend::{self, coordinates, RecommendError};

const VILLAGE_REQUIRED: &str = "Village name is required";
const COORDINATES_REQUIRED: &str = "Latitude and longitude are required";
const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// Parse the raw body as a JSON object.
///
/// Empty, malformed or non-object bodies are `MissingInput`: the required
/// fields cannot be read from them.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, RecommendError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(RecommendError::missing(BODY_NOT_OBJECT)),
    }
}

/// Serialize a response, mapping failure to `InternalFault`.
fn json_ok<T: Serialize>(value: &T) -> Result<Response, RecommendError> {
    let body = serde_json::to_value(value)
        .map_err(|e| RecommendError::internal(format!("response serialization: {e}")))?;
    Ok(Json(body).into_response())
}

/// POST /api/recommend-by-village - Recommend a crop for a named location
///
/// Body: `{ "village": "Pune, Maharashtra" }`. Unknown villages get the
/// default recommendation; a missing or blank name is a 400.
pub async fn recommend_by_village(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Response, RecommendError> {
    let payload = parse_object(&body)?;
    let village = payload
        .get("village")
        .and_then(Value::as_str)
        .ok_or_else(|| RecommendError::missing(VILLAGE_REQUIRED))?;

    let recommendation = recommend::recommend_by_village(village, &state.entropy)?;
    json_ok(&recommendation)
}

/// POST /api/recommend-by-coordinates - Recommend a crop for a lat/lon pair
///
/// Body: `{ "latitude": 18.52, "longitude": 73.86 }`. Numeric strings are
/// accepted. A missing or non-numeric coordinate is a 400.
pub async fn recommend_by_coordinates(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Response, RecommendError> {
    let payload = parse_object(&body)?;
    let read = |field: &str| {
        payload
            .get(field)
            .and_then(coordinates::parse_coordinate)
            .ok_or_else(|| RecommendError::missing(COORDINATES_REQUIRED))
    };
    let latitude = read("latitude")?;
    let longitude = read("longitude")?;

    let recommendation =
        recommend::recommend_by_coordinates(latitude, longitude, &state.entropy)?;
    json_ok(&recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn call_village(body: &'static str) -> Response {
        let body = Bytes::from_static(body.as_bytes());
        match recommend_by_village(State(ApiState::default()), body).await {
            Ok(resp) => resp,
            Err(e) => e.into_response(),
        }
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        for body in ["", "not json", "[]", "\"pune\"", "null", "42"] {
            assert!(parse_object(body.as_bytes()).is_err(), "{body:?}");
        }
        assert!(parse_object(b"{}").is_ok());
    }

    #[tokio::test]
    async fn test_village_ok() {
        let resp = call_village(r#"{"village":"Delhi"}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_village_wrong_type_is_400() {
        let resp = call_village(r#"{"village":123}"#).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
