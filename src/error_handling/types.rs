//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::fmt;
use std::time::Duration;

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{EXIT_DATA_SHAPE, EXIT_FAILURE, EXIT_USAGE};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// What was wrong with a field of the geolocation document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeProblem {
    /// The field (or one of its parents) is absent or `null`.
    Missing,
    /// The field has a different JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// The field is a number, but not one that fits the expected type.
    OutOfRange { expected: &'static str },
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeProblem::Missing => f.write_str("missing"),
            ShapeProblem::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ShapeProblem::OutOfRange { expected } => write!(f, "out of range for {expected}"),
        }
    }
}

/// A required field of the geolocation document is missing or mistyped.
///
/// This means the remote schema no longer matches what the report needs,
/// and is treated as more severe than a transport failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{path}` is {problem}")]
pub struct DataShapeError {
    /// Dotted path of the offending field, e.g. `network.hosts.start`
    pub path: String,
    pub problem: ShapeProblem,
}

/// Transport-level failure categories for the geolocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum NetworkFault {
    Timeout,
    Connect,
    Request,
    Redirect,
    Body,
    Decode,
    Builder,
    Other,
}

impl fmt::Display for NetworkFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetworkFault {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkFault::Timeout => "timeout",
            NetworkFault::Connect => "connection error",
            NetworkFault::Request => "request error",
            NetworkFault::Redirect => "redirect error",
            NetworkFault::Body => "body error",
            NetworkFault::Decode => "decode error",
            NetworkFault::Builder => "invalid request",
            NetworkFault::Other => "network error",
        }
    }
}

/// Errors that end a lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The IP argument is not a valid IPv4/IPv6 address.
    #[error("Invalid IP address provided: {0:?}")]
    InvalidArgument(String),

    /// The request never produced an HTTP response.
    #[error("Request to {url} failed ({fault})")]
    Network {
        url: String,
        fault: NetworkFault,
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-2xx status.
    #[error("Error: Code {status}.")]
    HttpStatus { url: String, status: u16 },

    /// The response body is not JSON.
    #[error("Response from {url} is not valid JSON")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document lacks a field the report needs.
    #[error("Data shape error: {0}")]
    DataShape(#[from] DataShapeError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Reverse DNS failures. Never fatal: they turn into "no hostname".
#[derive(Error, Debug)]
pub enum DnsLookupError {
    #[error("reverse lookup failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("reverse lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("no PTR record found")]
    NoRecord,
}

/// Error kinds with their user-facing label and process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    InvalidArgument,
    Network,
    HttpStatus,
    Parse,
    DataShape,
    DnsLookup,
    Initialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "Invalid argument",
            ErrorKind::Network => "Network error",
            ErrorKind::HttpStatus => "HTTP status error",
            ErrorKind::Parse => "JSON parse error",
            ErrorKind::DataShape => "Data shape error",
            ErrorKind::DnsLookup => "DNS lookup error",
            ErrorKind::Initialization => "Initialization error",
        }
    }

    /// Whether this kind ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ErrorKind::DnsLookup)
    }

    /// Process exit code for this kind (0 for non-fatal kinds).
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::InvalidArgument => EXIT_USAGE,
            ErrorKind::DataShape => EXIT_DATA_SHAPE,
            ErrorKind::DnsLookup => 0,
            ErrorKind::Network
            | ErrorKind::HttpStatus
            | ErrorKind::Parse
            | ErrorKind::Initialization => EXIT_FAILURE,
        }
    }
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LookupError::Network { .. } => ErrorKind::Network,
            LookupError::HttpStatus { .. } => ErrorKind::HttpStatus,
            LookupError::Parse { .. } => ErrorKind::Parse,
            LookupError::DataShape(_) => ErrorKind::DataShape,
            LookupError::Initialization(_) => ErrorKind::Initialization,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

impl DnsLookupError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::DnsLookup
    }
}
