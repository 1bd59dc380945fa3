//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver for reverse lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix, the
/// registry on Windows) so PTR answers match what the local machine sees.
/// If it can't be read, falls back to the default configuration (Google DNS).
///
/// Per-query timeout and attempts are lowered so an unresponsive server
/// fails fast; callers still bound the whole lookup.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) => {
            debug!("Using system DNS configuration");
            (config, opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration ({e}), using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;

    TokioAsyncResolver::tokio(config, opts)
}
