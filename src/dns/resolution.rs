//! Reverse DNS lookup.
//!
//! This module resolves an IP address back to a hostname (PTR record).

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::error_handling::DnsLookupError;

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// The whole lookup, including the resolver's own retries, is bounded by
/// `timeout`. The trailing root dot is stripped from the returned name.
///
/// # Arguments
///
/// * `ip` - The IP address to look up
/// * `resolver` - The DNS resolver instance
/// * `timeout` - Upper bound for the lookup
///
/// # Errors
///
/// Returns `DnsLookupError` if the lookup fails, times out, or yields no PTR record.
pub async fn reverse_dns_lookup(
    ip: IpAddr,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Result<String, DnsLookupError> {
    let response = tokio::time::timeout(timeout, resolver.reverse_lookup(ip))
        .await
        .map_err(|_| DnsLookupError::Timeout(timeout))??;
    let name = response
        .iter()
        .next()
        .map(|name| name.to_utf8())
        .ok_or(DnsLookupError::NoRecord)?;
    Ok(name.trim_end_matches('.').to_string())
}

/// Resolves the hostname of `ip`, swallowing failures.
///
/// # Returns
///
/// The hostname, or `None` if `ip` is not an address or the lookup fails.
/// Failures are logged at warn level.
pub async fn resolve_hostname(
    ip: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Option<String> {
    let addr: IpAddr = match ip.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Cannot reverse-resolve {ip:?}: {e}");
            return None;
        }
    };
    match reverse_dns_lookup(addr, resolver, timeout).await {
        Ok(hostname) => {
            debug!("{ip} resolves to {hostname}");
            Some(hostname)
        }
        Err(e) => {
            warn!("Failed to perform reverse DNS lookup for {ip}: {e}");
            None
        }
    }
}
