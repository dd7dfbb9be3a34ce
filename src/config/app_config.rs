//! Service configuration: HTTP server and jitter settings as TOML values
//!
//! Each struct implements `Default`, so an empty or missing file yields a
//! working configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    CONFIG_ENV_VAR, CORS_ORIGINS_ENV_VAR, DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_ADDR,
    LOCAL_CONFIG_FILE, SERVER_ADDR_ENV_VAR,
};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a service deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Confidence jitter settings
    #[serde(default)]
    pub jitter: JitterConfig,
}

impl AppConfig {
    /// Load configuration using the standard search order, then apply
    /// environment overrides and validate.
    ///
    /// An explicit path must load; the env var and local file fall back to
    /// the next source with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_addr(explicit, None)
    }

    /// Like [`AppConfig::load`], with a `--addr` value applied after the
    /// environment overrides.
    ///
    /// Validation runs once, on the final merged values, so an override can
    /// replace an unusable address from the file.
    pub fn load_with_addr(
        explicit: Option<&Path>,
        addr_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                info!(path = %path.display(), "Loaded config from --config");
                config
            }
            None => Self::search(),
        };

        config.apply_env_overrides();
        if let Some(addr) = addr_override {
            info!(addr = %addr, "Server address overridden by --addr");
            config.server.addr = addr.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Env var, then `./cropsmart.toml`, then defaults.
    fn search() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from {}, falling back",
                            CONFIG_ENV_VAR
                        );
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./cropsmart.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Read and parse a specific TOML file path. No rule checks.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse a TOML document. Unknown keys are logged, not rejected.
    ///
    /// Rule checks are left to [`AppConfig::validate`], which [`AppConfig::load`]
    /// runs after overrides are applied.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Apply `CROPSMART_SERVER_ADDR` and `CROPSMART_CORS_ORIGINS`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var(SERVER_ADDR_ENV_VAR) {
            if !addr.trim().is_empty() {
                info!(addr = %addr, "Server address overridden by {}", SERVER_ADDR_ENV_VAR);
                self.server.addr = addr.trim().to_string();
            }
        }
        if let Ok(origins) = std::env::var(CORS_ORIGINS_ENV_VAR) {
            self.server.cors_origins = split_origins(&origins);
            info!(origins = %origins, "CORS origins overridden by {}", CORS_ORIGINS_ENV_VAR);
        }
    }

    /// Validate all settings.
    ///
    /// Rules:
    /// - `server.addr` must parse as a socket address
    /// - `server.max_body_bytes` must be > 0
    /// - each CORS origin must be a valid header value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();
        let s = &self.server;

        if s.addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "server.addr '{}' is not a valid HOST:PORT socket address",
                s.addr
            ));
        }
        if s.max_body_bytes == 0 {
            errors.push("server.max_body_bytes must be > 0".to_string());
        }
        for origin in &s.cors_origins {
            if origin.is_empty() || HeaderValue::from_str(origin).is_err() {
                errors.push(format!("server.cors_origins entry '{origin}' is not a valid origin"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by `CROPSMART_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,

    /// Origins allowed to call the API cross-origin. Empty means same-origin only.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_server_addr() -> String {
    DEFAULT_SERVER_ADDR.to_string()
}

const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
            cors_origins: Vec::new(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// ============================================================================
// Jitter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JitterConfig {
    /// Fixed RNG seed. When set, the jittered confidence sequence is
    /// reproducible across runs.
    #[serde(default)]
    pub seed: Option<u64>,
}
