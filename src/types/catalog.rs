//! Catalogue entries: agro-zones and model metadata

use serde::Serialize;

/// One agro-climatic zone in the catalogue.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgroZone {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub states: &'static [&'static str],
    pub suitable_crops: &'static [&'static str],
}

/// Metadata about the recommendation model.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub accuracy: f64,
    pub last_updated: &'static str,
    pub training_data: &'static str,
    pub supported_crops: u32,
    pub agro_zones_covered: u32,
}
