//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Confidence Jitter
// ============================================================================

/// Total width of the random perturbation added to a base confidence.
///
/// `jittered = base + (U - 0.5) * CONFIDENCE_JITTER_SPAN`, so ±0.05.
pub const CONFIDENCE_JITTER_SPAN: f64 = 0.1;

/// Hard floor applied after jitter, independent of the base value.
pub const CONFIDENCE_FLOOR: f64 = 0.65;

/// Hard ceiling applied after jitter, independent of the base value.
pub const CONFIDENCE_CEILING: f64 = 0.95;

// ============================================================================
// HTTP Server
// ============================================================================

/// Default bind address when neither config, env nor CLI provide one.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

/// Largest accepted request body (bytes). Recommendation payloads are tiny.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

// ============================================================================
// Config Search
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CROPSMART_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "cropsmart.toml";

/// Environment override for `server.addr`.
pub const SERVER_ADDR_ENV_VAR: &str = "CROPSMART_SERVER_ADDR";

/// Environment override for `server.cors_origins` (comma-separated).
pub const CORS_ORIGINS_ENV_VAR: &str = "CROPSMART_CORS_ORIGINS";
