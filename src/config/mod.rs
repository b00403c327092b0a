//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `FORUM_MODERATION` prefix; nested values are separated by `__`.
//!
//! # Example
//!
//! ```no_run
//! use forum_moderation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod bootstrap;
mod error;
mod server;

pub use bootstrap::{BootstrapAdmin, BootstrapConfig};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

pub use crate::adapters::rate_limiter::RateLimitConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Minimum interval between throttled actions
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Optional seeded admin account
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `FORUM_MODERATION__*` variables:
    ///
    /// - `FORUM_MODERATION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FORUM_MODERATION__RATE_LIMIT__DEFAULT_WINDOW_MS=5000`
    /// - `FORUM_MODERATION__RATE_LIMIT__RESOURCES__THREAD_MESSAGES=1000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FORUM_MODERATION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.validate_rate_limit()?;
        self.bootstrap.validate()?;
        if self.bootstrap.is_enabled() && self.is_production() {
            return Err(ValidationError::BootstrapInProduction);
        }
        Ok(())
    }

    fn validate_rate_limit(&self) -> Result<(), ValidationError> {
        if self.rate_limit.default_window_ms == 0 {
            return Err(ValidationError::InvalidRateLimitWindow("default".to_string()));
        }
        if let Some((name, _)) = self.rate_limit.resources.iter().find(|(_, ms)| **ms == 0) {
            return Err(ValidationError::InvalidRateLimitWindow(name.clone()));
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
