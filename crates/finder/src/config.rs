//! Finder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the finder locally with no
//! setup. `dotenvy` loads a `.env` file first when one is present.
//!
//! - `PETAL_HOST` - Bind address (default: 127.0.0.1)
//! - `PETAL_PORT` - Listen port (default: 3000)
//! - `PETAL_BASE_URL` - Public URL for the finder (default: <http://localhost:3000>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production)
//! - `SENTRY_SAMPLE_RATE` - Error sample rate 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Tracing sample rate 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Errors produced while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Finder application configuration.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the finder
    pub base_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry performance tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

impl FinderConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A .env file is a dev convenience; absence is fine
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PETAL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PETAL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PETAL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PETAL_PORT".to_string(), e.to_string()))?;

        let base_url = get_env_or_default("PETAL_BASE_URL", "http://localhost:3000");
        validate_base_url(&base_url)?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_sample_rate("SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = get_sample_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?;

        Ok(Self {
            host,
            port,
            base_url,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Address for the listener to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the finder is served over HTTPS.
    ///
    /// Controls the `Secure` attribute on the session cookie.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Environment variable that may be absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Environment variable with a fallback.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a Sentry sample rate, clamped to 0.0-1.0.
fn get_sample_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => {
            let rate = raw
                .parse::<f32>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
            Ok(rate.clamp(0.0, 1.0))
        }
    }
}

/// Validate that the base URL parses and uses an http(s) scheme.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidEnvVar("PETAL_BASE_URL".to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "PETAL_BASE_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(())
}
