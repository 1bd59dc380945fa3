//! ipreco library: IP geolocation lookups against ip.guide
//!
//! This library validates an IP argument, fetches the geolocation document
//! for it (or for the caller's own address), extracts the network, ASN and
//! location fields, and optionally resolves the address back to a hostname.
//!
//! # Example
//!
//! ```no_run
//! use ipreco::{run_lookup, Config, Query};
//! use ipreco::report::{print_report, Palette};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let query = Query::from_args(Some("8.8.8.8"), true)?;
//! let result = run_lookup(&Config::default(), &query).await?;
//! print_report(&result, &Palette::colored());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. A current-thread runtime is enough:
//! a lookup is one HTTP request followed by at most one DNS query.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod fetch;
pub mod geoip;
pub mod initialization;
mod models;
pub mod report;
pub mod validation;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ErrorKind, LookupError};
pub use geoip::GeoRecord;
pub use models::{Query, ResolvedResult};
pub use run::{lookup, run_lookup};

// Internal run module (contains the lookup pipeline)
mod run {
    use std::time::Duration;

    use hickory_resolver::TokioAsyncResolver;
    use log::{debug, info};

    use crate::config::Config;
    use crate::dns::resolve_hostname;
    use crate::error_handling::LookupError;
    use crate::fetch::GeoClient;
    use crate::geoip::extract;
    use crate::initialization::{init_client, init_resolver};
    use crate::models::{Query, ResolvedResult};

    /// Runs one lookup with the provided configuration.
    ///
    /// Builds the HTTP client (and the DNS resolver, if the query asks for
    /// reverse DNS), then runs [`lookup`].
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the client can't be built, the request
    /// fails, or the response is not a usable geolocation document. Reverse
    /// DNS failures are not errors; they leave `hostname` empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ipreco::{run_lookup, Config, Query};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let query = Query::from_args(None, false)?;
    /// let result = run_lookup(&Config::default(), &query).await?;
    /// println!("{}", result.record.as_descriptor());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(config: &Config, query: &Query) -> Result<ResolvedResult, LookupError> {
        let client = GeoClient::new(init_client(config)?, config.base_url.clone());
        let resolver = query.resolve_dns.then(init_resolver);
        lookup(
            &client,
            resolver.as_ref(),
            query,
            Duration::from_secs(config.timeout_seconds),
        )
        .await
    }

    /// Fetch → extract → optional reverse DNS, with caller-provided resources.
    ///
    /// The reverse lookup runs only if the query asks for it, a resolver is
    /// given, and the service returned a non-empty IP.
    ///
    /// # Errors
    ///
    /// Same as [`run_lookup`], minus initialization errors.
    pub async fn lookup(
        client: &GeoClient,
        resolver: Option<&TokioAsyncResolver>,
        query: &Query,
        dns_timeout: Duration,
    ) -> Result<ResolvedResult, LookupError> {
        let doc = client.fetch(query.target_ip).await?;
        let record = extract(&doc)?;
        info!(
            "{} is in {} ({})",
            record.ip,
            record.country,
            record.as_descriptor()
        );

        let hostname = match resolver {
            Some(resolver) if query.resolve_dns && !record.ip.is_empty() => {
                debug!("Reverse-resolving {}", record.ip);
                resolve_hostname(&record.ip, resolver, dns_timeout).await
            }
            _ => None,
        };

        Ok(ResolvedResult { record, hostname })
    }
}
