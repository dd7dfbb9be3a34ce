//! CropSmart: crop recommendation service
//!
//! Resolves a location to a crop recommendation and serves it over HTTP.
//!
//! ## Architecture
//!
//! - **Recommend**: village-name lookup and latitude-band resolvers, plus
//!   confidence jitter with an injected random source
//! - **Catalog**: constant agro-zone, crop and model metadata tables
//! - **API**: Axum router exposing the resolvers and catalogues
//! - **Config**: TOML settings with environment overrides

pub mod api;
pub mod catalog;
pub mod config;
pub mod recommend;
pub mod types;

// Re-export configuration
pub use config::AppConfig;

// Re-export commonly used types
pub use types::{
    AgroZone, CoordinateRecommendation, Coordinates, ModelInfo, RecommendationRecord,
    VillageRecommendation,
};

// Re-export the engine entry points
pub use recommend::{
    recommend_by_coordinates, recommend_by_village, EntropySource, LatitudeBand, RecommendError,
};
