//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for the geolocation request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Total timeout from the config, and a connect timeout capped by it
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let connect_timeout = timeout.min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
