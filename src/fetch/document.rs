//! Geolocation document request.

use log::{debug, info};
use serde_json::Value;

use crate::error_handling::{categorize_reqwest_error, LookupError};

/// Builds the request URL: `base_url` alone, or `base_url` followed by the IP.
pub fn build_url(base_url: &str, ip: Option<&str>) -> String {
    match ip {
        Some(ip) => format!("{base_url}{ip}"),
        None => base_url.to_string(),
    }
}

/// Fetches the geolocation document for `ip` (or for the caller's own address).
///
/// Makes exactly one GET request; nothing is retried.
///
/// # Errors
///
/// - `LookupError::Network` if no response was received (DNS, connect, TLS,
///   timeout) or the body could not be read
/// - `LookupError::HttpStatus` if the status is not 2xx
/// - `LookupError::Parse` if the body is not JSON
pub async fn fetch_geo_document(
    client: &reqwest::Client,
    base_url: &str,
    ip: Option<&str>,
) -> Result<Value, LookupError> {
    let url = build_url(base_url, ip);
    debug!("Sending request to {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| network_error(&url, source))?;

    let status = response.status();
    if !status.is_success() {
        info!("{url} answered with status {status}");
        return Err(LookupError::HttpStatus {
            url,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| network_error(&url, source))?;
    debug!("Received {} bytes from {url}", body.len());

    serde_json::from_str(&body).map_err(|source| LookupError::Parse { url, source })
}

fn network_error(url: &str, source: reqwest::Error) -> LookupError {
    LookupError::Network {
        url: url.to_string(),
        fault: categorize_reqwest_error(&source),
        source,
    }
}
