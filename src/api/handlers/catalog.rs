//! Catalogue endpoints: agro-zones, supported crops, model info

use axum::Json;
use serde::Serialize;

use crate::catalog::{AGRO_ZONES, MODEL_INFO, SUPPORTED_CROPS};
use crate::types::{AgroZone, ModelInfo};

#[derive(Debug, Serialize)]
pub struct AgroZonesResponse {
    pub zones: &'static [AgroZone],
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SupportedCropsResponse {
    pub crops: &'static [&'static str],
    pub count: usize,
}

/// GET /api/agro-zones - The agro-climatic zone catalogue
pub async fn agro_zones() -> Json<AgroZonesResponse> {
    Json(AgroZonesResponse {
        zones: &AGRO_ZONES,
        count: AGRO_ZONES.len(),
    })
}

/// GET /api/supported-crops - Every crop the model can recommend
pub async fn supported_crops() -> Json<SupportedCropsResponse> {
    Json(SupportedCropsResponse {
        crops: &SUPPORTED_CROPS,
        count: SUPPORTED_CROPS.len(),
    })
}

/// GET /api/model-info
pub async fn model_info() -> Json<ModelInfo> {
    Json(MODEL_INFO)
}
