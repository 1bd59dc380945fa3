//! Geolocation record extraction.
//!
//! This module turns the JSON document returned by the geolocation service
//! into a flat `GeoRecord`.

mod extract;
mod types;

// Re-export public API
pub use extract::extract;
pub use types::GeoRecord;
