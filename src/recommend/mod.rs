//! Crop recommendation engine
//!
//! Two pure resolvers produce a base [`RecommendationRecord`]:
//! - [`village`]: case-insensitive, comma-truncated lookup with a default on miss
//! - [`coordinates`]: latitude bands with a coastal longitude override
//!
//! [`jitter`] then perturbs the confidence before it reaches a caller.

pub mod coordinates;
pub mod jitter;
pub mod village;

pub use coordinates::LatitudeBand;
pub use jitter::EntropySource;

use thiserror::Error;

use crate::types::{
    CoordinateRecommendation, Coordinates, RecommendationRecord, VillageRecommendation,
};

/// Failure of a recommendation request.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The caller omitted or malformed a required field.
    #[error("{0}")]
    MissingInput(String),

    /// Unexpected failure while building the response.
    #[error("internal fault: {0}")]
    InternalFault(String),
}

impl RecommendError {
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalFault(msg.into())
    }
}

fn jittered(record: RecommendationRecord, entropy: &EntropySource) -> RecommendationRecord {
    record.with_confidence(entropy.jitter(record.confidence))
}

/// Resolve a village name and apply confidence jitter.
pub fn recommend_by_village(
    village: &str,
    entropy: &EntropySource,
) -> Result<VillageRecommendation, RecommendError> {
    let record = village::resolve(village)?;
    Ok(VillageRecommendation {
        record: jittered(record, entropy),
        location: village.to_string(),
    })
}

/// Resolve a coordinate pair and apply confidence jitter.
pub fn recommend_by_coordinates(
    latitude: f64,
    longitude: f64,
    entropy: &EntropySource,
) -> Result<CoordinateRecommendation, RecommendError> {
    let record = coordinates::resolve(latitude, longitude)?;
    Ok(CoordinateRecommendation {
        record: jittered(record, entropy),
        coordinates: Coordinates { latitude, longitude },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{CONFIDENCE_CEILING, CONFIDENCE_FLOOR};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_village_recommendation_echoes_raw_input() {
        let entropy = EntropySource::default();
        let rec = recommend_by_village("  Pune, Maharashtra", &entropy).unwrap();
        assert_eq!(rec.location, "  Pune, Maharashtra");
        assert_eq!(rec.record.primary_crop, "Wheat");
        assert!((0.82..=0.92).contains(&rec.record.confidence));
    }

    #[test]
    fn test_village_recommendation_exact_with_seed() {
        let entropy = EntropySource::from_seed(Some(1234));
        let mut rng = StdRng::seed_from_u64(1234);
        let expected = jitter::apply_draw(0.87, rng.gen::<f64>());

        let rec = recommend_by_village("pune", &entropy).unwrap();
        assert_relative_eq!(rec.record.confidence, expected);
    }

    #[test]
    fn test_coordinate_recommendation_echoes_parsed_values() {
        let entropy = EntropySource::from_seed(Some(5));
        let rec = recommend_by_coordinates(18.52, 73.86, &entropy).unwrap();
        assert_eq!(rec.coordinates, Coordinates { latitude: 18.52, longitude: 73.86 });
        assert_eq!(rec.record.primary_crop, "Rice");
        assert_eq!(rec.record.agro_zone, "Coastal");
        assert!((CONFIDENCE_FLOOR..=CONFIDENCE_CEILING).contains(&rec.record.confidence));
    }

    #[test]
    fn test_errors_propagate() {
        let entropy = EntropySource::default();
        assert!(matches!(
            recommend_by_village(" ", &entropy),
            Err(RecommendError::MissingInput(_))
        ));
        assert!(matches!(
            recommend_by_coordinates(f64::NAN, 1.0, &entropy),
            Err(RecommendError::MissingInput(_))
        ));
    }

    #[test]
    fn test_missing_input_message_is_caller_facing() {
        let err = RecommendError::missing("Village name is required");
        assert_eq!(err.to_string(), "Village name is required");
    }
}
