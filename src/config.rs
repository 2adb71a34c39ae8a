//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`.
//! The embedding application is expected to call `dotenvy::dotenv()` first in local
//! development.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `GEOCODING_API_KEY`: API key for the address-autocomplete service
//!
//! ## Optional Variables
//! - `COUNTRY_API_BASE_URL`: Country-metadata service base URL (default: "https://restcountries.com")
//! - `COUNTRY_API_TIMEOUT_SECONDS`: Catalog fetch timeout (default: 10)
//! - `GEOCODING_API_URL`: Address-autocomplete endpoint (default: "https://api.locationiq.com/v1/autocomplete")
//! - `GEOCODING_TIMEOUT_SECONDS`: Autocomplete request timeout (default: 8)
//! - `ADDRESS_SUGGESTION_LIMIT`: Suggestions requested per query (default: 5)

use serde::Deserialize;

/// Complete configuration for the outbound HTTP clients.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Country-metadata service base URL (dial-code catalog)
    pub country_api_base_url: String,

    /// Timeout for the once-per-session catalog fetch, in seconds
    pub country_api_timeout_seconds: u64,

    /// Address-autocomplete endpoint
    pub geocoding_api_url: String,

    /// API key sent with every autocomplete request
    pub geocoding_api_key: String,

    /// Timeout for autocomplete requests, in seconds
    pub geocoding_timeout_seconds: u64,

    /// Number of address suggestions requested per query
    pub address_suggestion_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            country_api_base_url: env_or(
                "COUNTRY_API_BASE_URL",
                "https://restcountries.com".to_string(),
            )?,
            country_api_timeout_seconds: env_or("COUNTRY_API_TIMEOUT_SECONDS", 10)?,
            geocoding_api_url: env_or(
                "GEOCODING_API_URL",
                "https://api.locationiq.com/v1/autocomplete".to_string(),
            )?,
            geocoding_api_key: env_required("GEOCODING_API_KEY")?,
            geocoding_timeout_seconds: env_or("GEOCODING_TIMEOUT_SECONDS", 8)?,
            address_suggestion_limit: env_or("ADDRESS_SUGGESTION_LIMIT", 5)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
