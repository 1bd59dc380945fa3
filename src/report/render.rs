//! Report rendering.
//!
//! Everything here returns a `String`; the `print_*` wrappers in the parent
//! module do the writing.

use std::fmt::Write;
use std::net::IpAddr;

use super::style::{Palette, Style};
use crate::error_handling::{format_error_chain, LookupError};
use crate::models::ResolvedResult;

const BANNER: &str = r"
##  ######  ######  ####### ######  ######
##  ##   ## ##   ## ##     ##      ##    ##
##  ######  ######  #####  ##      ##    ##
##  ##      ##  ##  ##     ##      ##    ##
##  ##      ##   ## ####### ######  ######
";

/// Renders the geolocation report.
///
/// ```text
///
/// Geolocation Data Retrieved:
///
/// 8.8.8.8 -> GOOGLE - Google LLC (US) - ASN: 15169
///
///  *  IP Range: 8.8.8.1 - 8.8.8.254
///  *  Hostname: dns.google
///  *  City: Unknown
///  *  Country: United States
///  *  Timezone: America/Chicago
///  *  Latitude: 37.751 - Longitude: -97.822
///
/// ```
///
/// The hostname line is only present when a hostname was resolved.
pub fn render_report(result: &ResolvedResult, palette: &Palette) -> String {
    let record = &result.record;
    let bullet = palette.bullet();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{}",
        palette.paint("\nGeolocation Data Retrieved:", Style::Success)
    );
    let _ = writeln!(out, "\n{} -> {}\n", record.ip, record.as_descriptor());
    let _ = writeln!(out, "{bullet}IP Range: {}", record.ip_range());
    if let Some(hostname) = &result.hostname {
        let _ = writeln!(out, "{bullet}Hostname: {hostname}");
    }
    let _ = writeln!(out, "{bullet}City: {}", record.city);
    let _ = writeln!(out, "{bullet}Country: {}", record.country);
    let _ = writeln!(out, "{bullet}Timezone: {}", record.timezone);
    let _ = writeln!(
        out,
        "{bullet}Latitude: {} - Longitude: {}\n",
        record.latitude, record.longitude
    );
    out
}

/// Banner and version line.
pub fn render_banner(palette: &Palette) -> String {
    format!(
        "{}\n{}\n",
        palette.paint(BANNER, Style::Success),
        palette.paint(
            &format!(
                "ipreco v{} - IP geolocation via ip.guide",
                env!("CARGO_PKG_VERSION")
            ),
            Style::Warning
        )
    )
}

/// `[+] Target IP: <ip>`, or "your own address" when no IP was given.
pub fn render_target(target: Option<IpAddr>, palette: &Palette) -> String {
    let target = target.map_or_else(|| "your own address".to_string(), |ip| ip.to_string());
    format!(
        "{} {}",
        palette.marker(Style::Info),
        palette.paint(&format!("Target IP: {target}"), Style::Info)
    )
}

/// `[-] <error and its causes>`
pub fn render_error(error: &LookupError, palette: &Palette) -> String {
    render_failure(&format_error_chain(error), palette)
}

/// `[-] <message>`
pub fn render_failure(message: &str, palette: &Palette) -> String {
    format!(
        "{} {}",
        palette.marker(Style::Error),
        palette.paint(message, Style::Error)
    )
}

/// Warning shown when a requested reverse lookup produced no hostname.
pub fn render_dns_warning(palette: &Palette) -> String {
    render_failure("DNS Resolution Error.", palette)
}
