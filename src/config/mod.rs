//! Service Configuration Module
//!
//! Operator-tunable settings loaded from TOML, with environment and CLI
//! overrides applied on top.
//!
//! ## Loading Order
//!
//! 1. `--config <PATH>` CLI flag (hard error if the file is unusable)
//! 2. `CROPSMART_CONFIG` environment variable (path to TOML file)
//! 3. `cropsmart.toml` in the current working directory
//! 4. Built-in defaults
//!
//! `CROPSMART_SERVER_ADDR` and `CROPSMART_CORS_ORIGINS` then override the
//! matching `[server]` keys.
//!
//! ## Usage
//!
//! ```ignore
//! let config = AppConfig::load(args.config.as_deref())?;
//! let app = api::create_app(state, &config.server);
//! ```

mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::*;
