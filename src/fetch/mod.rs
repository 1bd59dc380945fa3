//! Geolocation service client.
//!
//! One GET to the configured endpoint, optionally suffixed with the target
//! address, returning the parsed JSON document.

mod document;

use std::net::IpAddr;

use serde_json::Value;

use crate::error_handling::LookupError;

// Re-export public API
pub use document::{build_url, fetch_geo_document};

/// HTTP client bound to a geolocation endpoint.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the document for `ip`, or for the caller's own address when `None`.
    ///
    /// # Errors
    ///
    /// See [`fetch_geo_document`].
    pub async fn fetch(&self, ip: Option<IpAddr>) -> Result<Value, LookupError> {
        let ip = ip.map(|addr| addr.to_string());
        fetch_geo_document(&self.client, &self.base_url, ip.as_deref()).await
    }
}
