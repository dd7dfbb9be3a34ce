//! Recommendation record and response shapes

use serde::Serialize;

/// A single crop recommendation as stored in the lookup tables.
///
/// Field names on the wire follow the front end's contract:
/// `crop`, `confidence`, `agroZone`, `topSuggestions`, `reason`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    /// The single recommended crop
    #[serde(rename = "crop")]
    pub primary_crop: &'static str,
    /// Confidence in [0, 1]; the base value in the tables, jittered in responses
    pub confidence: f64,
    /// Descriptive zone label (e.g. "Tropical", "Coastal")
    pub agro_zone: &'static str,
    /// Alternative suggestions in display order
    #[serde(rename = "topSuggestions")]
    pub alternative_crops: [&'static str; 3],
    /// Human-readable justification tied to the zone
    #[serde(rename = "reason")]
    pub rationale: &'static str,
}

impl RecommendationRecord {
    /// Copy of this record carrying a different confidence value.
    #[must_use]
    pub fn with_confidence(self, confidence: f64) -> Self {
        Self { confidence, ..self }
    }
}

/// Response body for `POST /api/recommend-by-village`.
#[derive(Debug, Clone, Serialize)]
pub struct VillageRecommendation {
    #[serde(flatten)]
    pub record: RecommendationRecord,
    /// The caller's input, echoed verbatim
    pub location: String,
}

/// Parsed coordinate pair echoed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body for `POST /api/recommend-by-coordinates`.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinateRecommendation {
    #[serde(flatten)]
    pub record: RecommendationRecord,
    pub coordinates: Coordinates,
}
