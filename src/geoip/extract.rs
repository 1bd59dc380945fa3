//! Field extraction from the ip.guide JSON document.
//!
//! The document looks like:
//!
//! ```json
//! {
//!   "ip": "8.8.8.8",
//!   "network": {
//!     "cidr": "8.8.8.0/24",
//!     "hosts": { "start": "8.8.8.1", "end": "8.8.8.254" },
//!     "autonomous_system": {
//!       "asn": 15169, "name": "GOOGLE", "organization": "Google LLC",
//!       "country": "US", "rir": "ARIN"
//!     }
//!   },
//!   "location": {
//!     "city": null, "country": "United States",
//!     "timezone": "America/Chicago", "latitude": 37.751, "longitude": -97.822
//!   }
//! }
//! ```
//!
//! Values are taken as-is: a number in a string field, or a string in a
//! number field, is a `DataShapeError` rather than being converted.

use log::debug;
use serde_json::Value;

use crate::config::UNKNOWN_CITY;
use crate::error_handling::{DataShapeError, ShapeProblem};
use crate::geoip::GeoRecord;

/// Extracts a `GeoRecord` from a geolocation document.
///
/// # Errors
///
/// Returns `DataShapeError` naming the first required field that is missing
/// or has the wrong JSON type. `location.city` is the only optional field.
pub fn extract(doc: &Value) -> Result<GeoRecord, DataShapeError> {
    let record = GeoRecord {
        ip: require_str(doc, &["ip"])?,
        range_start: require_str(doc, &["network", "hosts", "start"])?,
        range_end: require_str(doc, &["network", "hosts", "end"])?,
        as_name: require_str(doc, &["network", "autonomous_system", "name"])?,
        as_org: require_str(doc, &["network", "autonomous_system", "organization"])?,
        as_country: require_str(doc, &["network", "autonomous_system", "country"])?,
        asn: require_u32(doc, &["network", "autonomous_system", "asn"])?,
        city: optional_str(doc, &["location", "city"])?
            .filter(|city| !city.is_empty())
            .unwrap_or_else(|| UNKNOWN_CITY.to_string()),
        country: require_str(doc, &["location", "country"])?,
        timezone: require_str(doc, &["location", "timezone"])?,
        latitude: require_f64(doc, &["location", "latitude"])?,
        longitude: require_f64(doc, &["location", "longitude"])?,
    };
    debug!(
        "Extracted record for {} (AS{} {})",
        record.ip, record.asn, record.as_org
    );
    Ok(record)
}

/// Walks `path` from `doc`. `null` counts as absent.
fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Result<Option<&'a Value>, DataShapeError> {
    let mut current = doc;
    for (depth, key) in path.iter().enumerate() {
        match current {
            Value::Object(map) => match map.get(*key) {
                Some(Value::Null) | None => return Ok(None),
                Some(next) => current = next,
            },
            other => {
                return Err(wrong_type(&path[..depth], "object", other));
            }
        }
    }
    Ok(Some(current))
}

fn require<'a>(doc: &'a Value, path: &[&str]) -> Result<&'a Value, DataShapeError> {
    lookup(doc, path)?.ok_or_else(|| DataShapeError {
        path: path.join("."),
        problem: ShapeProblem::Missing,
    })
}

fn require_str(doc: &Value, path: &[&str]) -> Result<String, DataShapeError> {
    match require(doc, path)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(wrong_type(path, "string", other)),
    }
}

fn optional_str(doc: &Value, path: &[&str]) -> Result<Option<String>, DataShapeError> {
    match lookup(doc, path)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(path, "string", other)),
    }
}

fn require_u32(doc: &Value, path: &[&str]) -> Result<u32, DataShapeError> {
    match require(doc, path)? {
        Value::Number(n) if n.is_u64() => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| DataShapeError {
                path: path.join("."),
                problem: ShapeProblem::OutOfRange { expected: "u32" },
            }),
        Value::Number(_) => Err(DataShapeError {
            path: path.join("."),
            problem: ShapeProblem::OutOfRange { expected: "u32" },
        }),
        other => Err(wrong_type(path, "integer", other)),
    }
}

fn require_f64(doc: &Value, path: &[&str]) -> Result<f64, DataShapeError> {
    match require(doc, path)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| DataShapeError {
            path: path.join("."),
            problem: ShapeProblem::OutOfRange { expected: "f64" },
        }),
        other => Err(wrong_type(path, "number", other)),
    }
}

fn wrong_type(path: &[&str], expected: &'static str, found: &Value) -> DataShapeError {
    DataShapeError {
        path: if path.is_empty() {
            "<root>".to_string()
        } else {
            path.join(".")
        },
        problem: ShapeProblem::WrongType {
            expected,
            found: json_type_name(found),
        },
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
