//! IP address argument validation.

use std::net::IpAddr;

use log::debug;

use crate::error_handling::LookupError;

/// Returns whether `ip` is a well-formed IPv4 or IPv6 address.
///
/// Accepts dotted-quad IPv4 and colon-hex IPv6, including the compressed
/// (`::`) and IPv4-mixed (`::ffff:1.2.3.4`) forms. Surrounding whitespace,
/// ports, prefixes and zone identifiers are rejected.
pub fn validate_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

/// Turns the optional IP argument into a lookup target.
///
/// An absent or empty argument means "the caller's own address" and yields
/// `Ok(None)`; the service infers the address from the connection.
///
/// # Errors
///
/// Returns `LookupError::InvalidArgument` if the argument is not a valid address.
pub fn parse_target(ip: Option<&str>) -> Result<Option<IpAddr>, LookupError> {
    match ip {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<IpAddr>() {
            Ok(addr) => {
                debug!("Validated target address {addr}");
                Ok(Some(addr))
            }
            Err(_) => Err(LookupError::InvalidArgument(raw.to_string())),
        },
    }
}
