//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HTTP_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Your own address
/// ipreco
///
/// # A specific address, with reverse DNS
/// ipreco 8.8.8.8 --dns
/// ipreco -d 2001:4860:4860::8888
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ipreco",
    about = "IP geolocation and ASN lookup (ip.guide), with optional reverse DNS.",
    version
)]
pub struct Opt {
    /// IP address to look up (default: your own address)
    pub ip: Option<String>,

    /// Perform a reverse DNS lookup for the address
    #[arg(short = 'd', long = "dns")]
    pub dns: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Timeout in seconds for the HTTP request and the reverse DNS lookup
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Geolocation endpoint; the IP is appended to it
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use ipreco::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Geolocation endpoint (must end with `/` if the IP is to become a path segment)
    pub base_url: String,

    /// Timeout in seconds for the HTTP request and the reverse DNS lookup
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Print the banner before the report
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            show_banner: true,
        }
    }
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            base_url: opt.base_url.clone(),
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            show_banner: !opt.no_banner,
            ..Default::default()
        }
    }
}
