// Shared test helpers for canned geolocation documents and offline resolvers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::time::Duration;

/// The document ip.guide returns for 8.8.8.8 (no city).
#[allow(dead_code)] // Used by other test files
pub fn google_dns_document() -> Value {
    json!({
        "ip": "8.8.8.8",
        "network": {
            "cidr": "8.8.8.0/24",
            "hosts": { "start": "8.8.8.1", "end": "8.8.8.254" },
            "autonomous_system": {
                "asn": 15169,
                "name": "GOOGLE",
                "organization": "Google LLC",
                "country": "US",
                "rir": "ARIN"
            }
        },
        "location": {
            "city": null,
            "country": "United States",
            "timezone": "America/Chicago",
            "latitude": 37.751,
            "longitude": -97.822
        }
    })
}

/// A resolver pointed at a local UDP socket that never answers.
///
/// The socket is returned too; keep it alive for the duration of the test.
#[allow(dead_code)] // Used by other test files
pub fn silent_resolver() -> (TokioAsyncResolver, UdpSocket) {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("Failed to bind UDP socket");
    let port = socket.local_addr().expect("Socket has no address").port();

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_millis(100);
    opts.attempts = 1;
    let nameservers =
        NameServerConfigGroup::from_ips_clear(&[IpAddr::V4(Ipv4Addr::LOCALHOST)], port, true);
    let resolver =
        TokioAsyncResolver::tokio(ResolverConfig::from_parts(None, vec![], nameservers), opts);
    (resolver, socket)
}
