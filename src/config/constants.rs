//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the geolocation endpoint, timeouts and exit codes.

/// Geolocation service endpoint.
///
/// `GET <base>` describes the caller's own address, `GET <base><ip>` describes `<ip>`.
pub const DEFAULT_BASE_URL: &str = "https://ip.guide/";

/// Total HTTP request timeout in seconds (connect + response + body)
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// DNS query timeout in seconds
/// Most PTR queries complete in <1s, 3s fails fast on unresponsive servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per nameserver
pub const DNS_ATTEMPTS: usize = 2;

/// User-Agent sent with the geolocation request.
pub const DEFAULT_USER_AGENT: &str = concat!("ipreco/", env!("CARGO_PKG_VERSION"));

/// City shown when the service has no city for the address.
pub const UNKNOWN_CITY: &str = "Unknown";

// Process exit codes
pub const EXIT_FAILURE: i32 = 1;
/// Same code clap uses for usage errors
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_DATA_SHAPE: i32 = 3;
/// 128 + SIGINT
pub const EXIT_INTERRUPTED: i32 = 130;
