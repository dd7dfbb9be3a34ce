//! Coordinate resolution: latitude bands, then the coastal longitude override
//!
//! Bands are evaluated in order and the first match wins:
//!
//! | Band      | Latitude   |
//! |-----------|------------|
//! | Northern  | `[28, 35]` |
//! | Central   | `[20, 28)` |
//! | Southern  | `[8, 20)`  |
//! | Default   | otherwise  |
//!
//! Independently, a longitude in `[68, 75]` or `[80, 88]` replaces the zone and
//! alternatives with the coastal values. Crop, confidence and rationale stay.
//! No range validation is done; out-of-range values land in the default band.

use serde::Serialize;
use tracing::debug;

use super::RecommendError;
use crate::types::RecommendationRecord;

/// Coastal longitude windows (inclusive on both ends).
const COASTAL_LONGITUDES: [(f64, f64); 2] = [(68.0, 75.0), (80.0, 88.0)];

const COASTAL_ZONE: &str = "Coastal";
const COASTAL_ALTERNATIVES: [&str; 3] = ["Coconut", "Rice", "Cashew"];

/// Latitude band a coordinate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LatitudeBand {
    Northern,
    Central,
    Southern,
    Default,
}

impl LatitudeBand {
    /// Classify a latitude. First matching band wins.
    pub fn classify(latitude: f64) -> Self {
        if (28.0..=35.0).contains(&latitude) {
            Self::Northern
        } else if (20.0..28.0).contains(&latitude) {
            Self::Central
        } else if (8.0..20.0).contains(&latitude) {
            Self::Southern
        } else {
            Self::Default
        }
    }

    /// Base recommendation for this band.
    pub fn record(self) -> RecommendationRecord {
        match self {
            Self::Northern => RecommendationRecord {
                primary_crop: "Wheat",
                confidence: 0.82,
                agro_zone: "Arid to Semi-Arid",
                alternative_crops: ["Rice", "Mustard", "Sugarcane"],
                rationale: "Northern plains with fertile alluvial soil, ideal for wheat cultivation.",
            },
            Self::Central => RecommendationRecord {
                primary_crop: "Cotton",
                confidence: 0.79,
                agro_zone: "Semi-Arid",
                alternative_crops: ["Soybean", "Wheat", "Gram"],
                rationale: "Black cotton soil and moderate rainfall perfect for cotton farming.",
            },
            Self::Southern => RecommendationRecord {
                primary_crop: "Rice",
                confidence: 0.86,
                agro_zone: "Tropical",
                alternative_crops: ["Coconut", "Spices", "Millets"],
                rationale: "Tropical climate with monsoon rains ideal for paddy cultivation.",
            },
            Self::Default => RecommendationRecord {
                primary_crop: "Wheat",
                confidence: 0.75,
                agro_zone: "Mixed",
                alternative_crops: ["Rice", "Maize", "Pulses"],
                rationale: "General recommendation based on geographic coordinates.",
            },
        }
    }
}

/// Whether a longitude sits in one of the coastal windows.
pub fn is_coastal(longitude: f64) -> bool {
    COASTAL_LONGITUDES
        .iter()
        .any(|(lo, hi)| (*lo..=*hi).contains(&longitude))
}

/// Replace zone and alternatives with the coastal values.
fn apply_coastal_override(record: RecommendationRecord) -> RecommendationRecord {
    RecommendationRecord {
        agro_zone: COASTAL_ZONE,
        alternative_crops: COASTAL_ALTERNATIVES,
        ..record
    }
}

/// Resolve a coordinate pair to its base recommendation.
///
/// Non-finite input is `MissingInput`.
pub fn resolve(latitude: f64, longitude: f64) -> Result<RecommendationRecord, RecommendError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(RecommendError::missing("Latitude and longitude are required"));
    }

    let band = LatitudeBand::classify(latitude);
    let coastal = is_coastal(longitude);
    let base = band.record();
    let record = if coastal { apply_coastal_override(base) } else { base };

    debug!(latitude, longitude, band = ?band, coastal, "Resolved coordinates");
    Ok(record)
}

/// Read one coordinate from a JSON value.
///
/// Accepts a number or a numeric string (trimmed, parsed strictly). Anything
/// else, or a non-finite result, is `None`.
pub fn parse_coordinate(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
