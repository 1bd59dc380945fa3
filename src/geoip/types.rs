//! Geolocation data structures.

/// Flat view of the fields the report needs from the geolocation document.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub ip: String,
    /// First address of the announced network
    pub range_start: String,
    /// Last address of the announced network
    pub range_end: String,
    pub as_name: String,
    pub as_org: String,
    pub as_country: String,
    pub asn: u32,
    /// `"Unknown"` when the service has no city for the address
    pub city: String,
    pub country: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoRecord {
    /// `"<name> - <organization> (<country>) - ASN: <asn>"`
    pub fn as_descriptor(&self) -> String {
        format!(
            "{} - {} ({}) - ASN: {}",
            self.as_name, self.as_org, self.as_country, self.asn
        )
    }

    /// `"<start> - <end>"`
    pub fn ip_range(&self) -> String {
        format!("{} - {}", self.range_start, self.range_end)
    }
}
