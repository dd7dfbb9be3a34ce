//! Village-name resolution against the static village table

use tracing::debug;

use super::RecommendError;
use crate::types::RecommendationRecord;

/// Known village keys and their fixed recommendations.
static VILLAGE_TABLE: [(&str, RecommendationRecord); 5] = [
    (
        "pune",
        RecommendationRecord {
            primary_crop: "Wheat",
            confidence: 0.87,
            agro_zone: "Semi-Arid",
            alternative_crops: ["Rice", "Sugarcane", "Cotton"],
            rationale: "Ideal climate and soil conditions for wheat cultivation in this region.",
        },
    ),
    (
        "mumbai",
        RecommendationRecord {
            primary_crop: "Rice",
            confidence: 0.92,
            agro_zone: "Coastal",
            alternative_crops: ["Coconut", "Mango", "Cashew"],
            rationale: "High humidity and coastal climate perfect for rice production.",
        },
    ),
    (
        "delhi",
        RecommendationRecord {
            primary_crop: "Mustard",
            confidence: 0.78,
            agro_zone: "Arid",
            alternative_crops: ["Wheat", "Barley", "Gram"],
            rationale: "Cool winters and moderate rainfall suitable for mustard crops.",
        },
    ),
    (
        "bangalore",
        RecommendationRecord {
            primary_crop: "Ragi",
            confidence: 0.85,
            agro_zone: "Semi-Arid",
            alternative_crops: ["Maize", "Groundnut", "Sunflower"],
            rationale: "Moderate climate and well-drained soil ideal for finger millet.",
        },
    ),
    (
        "chennai",
        RecommendationRecord {
            primary_crop: "Rice",
            confidence: 0.89,
            agro_zone: "Coastal",
            alternative_crops: ["Sugarcane", "Cotton", "Groundnut"],
            rationale: "Tropical climate with adequate water supply perfect for paddy cultivation.",
        },
    ),
];

/// Returned for any village not in the table.
pub const DEFAULT_VILLAGE_RECORD: RecommendationRecord = RecommendationRecord {
    primary_crop: "Wheat",
    confidence: 0.75,
    agro_zone: "Mixed",
    alternative_crops: ["Rice", "Maize", "Pulses"],
    rationale: "General recommendation based on typical Indian farming conditions.",
};

/// Derive the table key: lower-cased, cut at the first comma, trimmed.
pub fn lookup_key(village: &str) -> String {
    let lowered = village.to_lowercase();
    lowered
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Resolve a free-text location to its base recommendation.
///
/// Blank input is `MissingInput`. An unknown key is not an error and yields
/// [`DEFAULT_VILLAGE_RECORD`].
pub fn resolve(village: &str) -> Result<RecommendationRecord, RecommendError> {
    if village.trim().is_empty() {
        return Err(RecommendError::missing("Village name is required"));
    }

    let key = lookup_key(village);
    let found = VILLAGE_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, record)| *record);

    debug!(village = %village, lookup_key = %key, matched = found.is_some(), "Resolved village");
    Ok(found.unwrap_or(DEFAULT_VILLAGE_RECORD))
}

/// Village keys with a dedicated entry, in table order.
pub fn known_villages() -> impl Iterator<Item = &'static str> {
    VILLAGE_TABLE.iter().map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_key_normalization() {
        assert_eq!(lookup_key("Pune"), "pune");
        assert_eq!(lookup_key("  PUNE , Maharashtra"), "pune");
        assert_eq!(lookup_key("Pune, Maharashtra, India"), "pune");
        assert_eq!(lookup_key(",Pune"), "");
    }

    #[test]
    fn test_pune_with_state_suffix() {
        let rec = resolve("Pune, Maharashtra").unwrap();
        assert_eq!(rec.primary_crop, "Wheat");
        assert_eq!(rec.agro_zone, "Semi-Arid");
        assert_eq!(rec.alternative_crops, ["Rice", "Sugarcane", "Cotton"]);
        assert!((rec.confidence - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_keys_are_case_insensitive_and_stable() {
        for key in known_villages() {
            let upper = key.to_uppercase();
            let with_state = format!("{upper}, Some State");
            let a = resolve(key).unwrap();
            let b = resolve(&upper).unwrap();
            let c = resolve(&with_state).unwrap();
            assert_eq!(a, b, "{key}");
            assert_eq!(a, c, "{key}");
            assert_ne!(a, DEFAULT_VILLAGE_RECORD, "{key} should not hit the default");
        }
    }

    #[test]
    fn test_unknown_village_returns_default() {
        for village in ["Nashik", "Timbuktu", "pune-east", "Mumbai Suburban"] {
            assert_eq!(resolve(village).unwrap(), DEFAULT_VILLAGE_RECORD, "{village}");
        }
    }

    #[test]
    fn test_comma_only_input_is_a_miss_not_an_error() {
        // Non-blank input whose key normalizes to "" is still a lookup miss
        assert_eq!(resolve(", Maharashtra").unwrap(), DEFAULT_VILLAGE_RECORD);
    }

    #[test]
    fn test_blank_village_is_missing_input() {
        for village in ["", "   ", "\t\n"] {
            assert!(matches!(resolve(village), Err(RecommendError::MissingInput(_))));
        }
    }

    #[test]
    fn test_table_alternatives_are_distinct_from_primary_order() {
        let mumbai = resolve("mumbai").unwrap();
        assert_eq!(mumbai.alternative_crops, ["Coconut", "Mango", "Cashew"]);
        let chennai = resolve("Chennai, Tamil Nadu").unwrap();
        assert_eq!(chennai.primary_crop, "Rice");
        assert_eq!(chennai.agro_zone, "Coastal");
    }
}
