//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`LookupError`, `DataShapeError`, `DnsLookupError`)
//! - Error kinds with their exit codes
//! - Categorization of transport errors
//!
//! Every kind except `DnsLookup` ends the run. `DataShape` gets its own exit
//! code because it means the remote schema changed under us.

mod categorization;
mod types;

use std::error::Error as StdError;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    DataShapeError, DnsLookupError, ErrorKind, InitializationError, LookupError, NetworkFault,
    ShapeProblem,
};

/// Formats an error and its sources as `outer: inner: root`.
///
/// Consecutive sources whose message is already contained in the previous one
/// are skipped, since `reqwest` and `hyper` tend to repeat themselves.
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut last = message.clone();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !last.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        last = text;
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXIT_DATA_SHAPE, EXIT_FAILURE, EXIT_USAGE};
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_fatal_kind_has_nonzero_exit_code() {
        for kind in ErrorKind::iter() {
            if kind.is_fatal() {
                assert_ne!(kind.exit_code(), 0, "{kind} must exit non-zero");
            } else {
                assert_eq!(kind.exit_code(), 0, "{kind} is not fatal");
            }
        }
    }

    #[test]
    fn test_only_dns_lookup_is_non_fatal() {
        let non_fatal: Vec<ErrorKind> = ErrorKind::iter().filter(|k| !k.is_fatal()).collect();
        assert_eq!(non_fatal, vec![ErrorKind::DnsLookup]);
    }

    #[test]
    fn test_data_shape_exit_code_is_distinct() {
        for kind in ErrorKind::iter() {
            if kind != ErrorKind::DataShape {
                assert_ne!(kind.exit_code(), EXIT_DATA_SHAPE);
            }
        }
    }

    #[test]
    fn test_lookup_error_kinds() {
        let invalid = LookupError::InvalidArgument("not-an-ip".to_string());
        assert_eq!(invalid.kind(), ErrorKind::InvalidArgument);
        assert_eq!(invalid.exit_code(), EXIT_USAGE);
        assert!(invalid.to_string().contains("Invalid IP address"));

        let status = LookupError::HttpStatus {
            url: "https://ip.guide/8.8.8.8".to_string(),
            status: 404,
        };
        assert_eq!(status.kind(), ErrorKind::HttpStatus);
        assert_eq!(status.exit_code(), EXIT_FAILURE);
        assert_eq!(status.to_string(), "Error: Code 404.");

        let shape = LookupError::from(DataShapeError {
            path: "network.hosts.start".to_string(),
            problem: ShapeProblem::Missing,
        });
        assert_eq!(shape.kind(), ErrorKind::DataShape);
        assert_eq!(
            shape.to_string(),
            "Data shape error: field `network.hosts.start` is missing"
        );
    }

    #[test]
    fn test_shape_problem_display() {
        let wrong = ShapeProblem::WrongType {
            expected: "integer",
            found: "string",
        };
        assert_eq!(wrong.to_string(), "expected integer, found string");
        let range = ShapeProblem::OutOfRange { expected: "u32" };
        assert_eq!(range.to_string(), "out of range for u32");
    }

    #[test]
    fn test_network_fault_labels_are_unique() {
        let labels: std::collections::HashSet<&str> =
            NetworkFault::iter().map(|f| f.as_str()).collect();
        assert_eq!(labels.len(), NetworkFault::iter().count());
    }

    #[test]
    fn test_format_error_chain_includes_sources() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = LookupError::Parse {
            url: "https://ip.guide/".to_string(),
            source,
        };
        let text = format_error_chain(&error);
        assert!(text.starts_with("Response from https://ip.guide/ is not valid JSON: "));
        assert!(text.contains("EOF"));
    }

    #[test]
    fn test_format_error_chain_skips_repeated_messages() {
        #[derive(Debug, thiserror::Error)]
        #[error("outer: inner")]
        struct Outer(#[source] Inner);
        #[derive(Debug, thiserror::Error)]
        #[error("inner")]
        struct Inner;

        assert_eq!(format_error_chain(&Outer(Inner)), "outer: inner");
    }
}
