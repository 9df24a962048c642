//! Shared domain types and configuration for the ukcovid workspace.

mod app_config;
mod config;
mod location;
mod record;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{ChartWindow, Location};
pub use record::{Record, Series};

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
