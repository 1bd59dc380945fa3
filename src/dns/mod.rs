//! Reverse DNS resolution.
//!
//! PTR lookups using `hickory-resolver`. A failed lookup is never fatal:
//! callers get `None` and carry on without a hostname.

mod resolution;

// Re-export public API
pub use resolution::{resolve_hostname, reverse_dns_lookup};
