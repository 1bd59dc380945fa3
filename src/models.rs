use std::net::IpAddr;

use crate::error_handling::LookupError;
use crate::geoip::GeoRecord;
use crate::validation::parse_target;

/// What to look up, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Address to look up; `None` asks the service about the caller's own address
    pub target_ip: Option<IpAddr>,
    /// Whether to reverse-resolve the address returned by the service
    pub resolve_dns: bool,
}

impl Query {
    /// Validates the raw IP argument and builds a query.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidArgument` if `ip` is not a valid address.
    pub fn from_args(ip: Option<&str>, resolve_dns: bool) -> Result<Self, LookupError> {
        Ok(Self {
            target_ip: parse_target(ip)?,
            resolve_dns,
        })
    }
}

/// Geolocation record plus the reverse DNS name, if one was looked up and found.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResult {
    pub record: GeoRecord,
    pub hostname: Option<String>,
}
