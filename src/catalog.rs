//! Constant catalogues served by the information endpoints

use crate::types::{AgroZone, ModelInfo};

pub static AGRO_ZONES: [AgroZone; 5] = [
    AgroZone {
        id: 1,
        name: "Arid",
        description: "Low rainfall, high temperature regions",
        states: &["Rajasthan", "Gujarat", "Haryana"],
        suitable_crops: &["Wheat", "Mustard", "Barley", "Gram"],
    },
    AgroZone {
        id: 2,
        name: "Semi-Arid",
        description: "Moderate rainfall, variable temperature",
        states: &["Maharashtra", "Karnataka", "Andhra Pradesh"],
        suitable_crops: &["Cotton", "Soybean", "Ragi", "Groundnut"],
    },
    AgroZone {
        id: 3,
        name: "Tropical",
        description: "High rainfall, high temperature and humidity",
        states: &["Kerala", "Tamil Nadu", "Karnataka"],
        suitable_crops: &["Rice", "Coconut", "Spices", "Rubber"],
    },
    AgroZone {
        id: 4,
        name: "Coastal",
        description: "High humidity, moderate temperature, sea influence",
        states: &["Goa", "Kerala", "West Bengal"],
        suitable_crops: &["Rice", "Coconut", "Cashew", "Fish farming"],
    },
    AgroZone {
        id: 5,
        name: "Subtropical",
        description: "Moderate rainfall and temperature",
        states: &["Punjab", "Uttar Pradesh", "Bihar"],
        suitable_crops: &["Wheat", "Rice", "Sugarcane", "Maize"],
    },
];

pub static SUPPORTED_CROPS: [&str; 25] = [
    "Wheat", "Rice", "Cotton", "Sugarcane", "Maize", "Soybean", "Mustard", "Gram", "Barley",
    "Ragi", "Groundnut", "Sunflower", "Coconut", "Mango", "Cashew", "Spices", "Millets",
    "Pulses", "Jowar", "Bajra", "Tur", "Moong", "Urad", "Chana", "Masoor",
];

pub static MODEL_INFO: ModelInfo = ModelInfo {
    name: "CropSmart AI",
    version: "1.1.1",
    accuracy: 0.847,
    last_updated: "September 2025",
    training_data: "Indian Agricultural Dataset 2025",
    supported_crops: 25,
    agro_zones_covered: 15,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{village, LatitudeBand};

    #[test]
    fn test_zone_ids_are_sequential() {
        for (i, zone) in AGRO_ZONES.iter().enumerate() {
            assert_eq!(zone.id as usize, i + 1);
        }
    }

    #[test]
    fn test_model_info_crop_count_matches_list() {
        assert_eq!(MODEL_INFO.supported_crops as usize, SUPPORTED_CROPS.len());
    }

    #[test]
    fn test_every_recommended_crop_is_supported() {
        let mut records: Vec<_> = [
            LatitudeBand::Northern,
            LatitudeBand::Central,
            LatitudeBand::Southern,
            LatitudeBand::Default,
        ]
        .iter()
        .map(|b| b.record())
        .collect();
        records.push(village::DEFAULT_VILLAGE_RECORD);
        records.extend(village::known_villages().map(|k| village::resolve(k).unwrap()));

        for rec in records {
            assert!(SUPPORTED_CROPS.contains(&rec.primary_crop), "{}", rec.primary_crop);
            for alt in rec.alternative_crops {
                assert!(SUPPORTED_CROPS.contains(&alt), "{alt}");
            }
        }
    }
}
