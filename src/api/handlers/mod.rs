//! API route handlers
//!
//! Request handling logic for all API endpoints including:
//! - Crop recommendation by village name and by coordinates
//! - Constant catalogues (agro-zones, supported crops, model info)
//! - Health and service index

mod catalog;
mod recommend;
mod status;

pub use catalog::*;
pub use recommend::*;
pub use status::*;

use std::sync::Arc;
use std::time::Instant;

use crate::recommend::EntropySource;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Random source for confidence jitter
    pub entropy: Arc<EntropySource>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(entropy: EntropySource) -> Self {
        Self {
            entropy: Arc::new(entropy),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(EntropySource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check(State(ApiState::default())).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_supported_crops_count() {
        let response = supported_crops().await;
        assert_eq!(response.count, response.crops.len());
        assert_eq!(response.count, 25);
    }

    #[tokio::test]
    async fn test_agro_zones_count() {
        let response = agro_zones().await;
        assert_eq!(response.count, 5);
    }
}
