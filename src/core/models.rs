// src/core/models.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::errors::LookupError;

// --- Richiesta di Scansione ---
// Scan Request

/// A domain submitted by the user. Construction only rejects empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub domain: String,
}

impl ScanRequest {
    /// Builds a request from raw input, returning `None` when nothing usable was typed.
    ///
    /// Input pasted as a URL (`https://example.com/page`) is reduced to its host.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let domain = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            url::Url::parse(trimmed)
                .ok()
                .and_then(|url| url.host_str().map(String::from))
                .unwrap_or_else(|| trimmed.to_string())
        } else {
            trimmed.to_string()
        };

        Some(Self { domain })
    }
}

/// The textual address returned by the resolver (IPv4 or IPv6).
pub type ResolvedAddress = String;

// --- Geolocalizzazione ---
// Geolocation

/// The record returned by the IP-info provider, kept exactly as received.
///
/// Coordinates stay textual; use [`IpInfo::coordinates`] to get numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    #[serde(default, deserialize_with = "text_or_number")]
    pub ip: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub city: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub country_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub org: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub region: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub latitude: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub longitude: String,
}

impl IpInfo {
    /// Parses the textual latitude/longitude pair.
    pub fn coordinates(&self) -> Result<Coordinates, LookupError> {
        let parse = |value: &str| value.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        match (parse(&self.latitude), parse(&self.longitude)) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(LookupError::InvalidCoordinates {
                latitude: self.latitude.clone(),
                longitude: self.longitude.clone(),
            }),
        }
    }

    /// "City, Country" as shown in the result panel.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country_name)
    }
}

// The provider is inconsistent about quoting numbers, and null shows up for unknown fields.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// A parsed latitude/longitude pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

// --- Storico ---
// History

/// One completed scan. Field names match the exported `scan-history.json` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHistoryEntry {
    pub domain: String,
    #[serde(rename = "ip")]
    pub address: ResolvedAddress,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
    #[serde(rename = "result")]
    pub info: IpInfo,
}

// --- Archi d'Attacco ---
// Attack Arcs

/// Color shared by every arc drawn on the globe.
pub const ATTACK_LINE_COLOR: &str = "#00fff2";

/// A named point an arc starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackOrigin {
    pub name: &'static str,
    pub coordinates: Coordinates,
}

/// The fixed origins, one arc each.
pub const ATTACK_ORIGINS: [AttackOrigin; 5] = [
    AttackOrigin { name: "San Francisco", coordinates: Coordinates::new(37.7749, -122.4194) },
    AttackOrigin { name: "New York", coordinates: Coordinates::new(40.7128, -74.0060) },
    AttackOrigin { name: "London", coordinates: Coordinates::new(51.5074, -0.1278) },
    AttackOrigin { name: "Tokyo", coordinates: Coordinates::new(35.6762, 139.6503) },
    AttackOrigin { name: "Sydney", coordinates: Coordinates::new(-33.8688, 151.2093) },
];

/// A purely visual arc from an origin to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackLine {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub color: String,
}

impl AttackLine {
    /// One arc per entry of [`ATTACK_ORIGINS`], in that order.
    pub fn toward(target: Coordinates) -> Vec<AttackLine> {
        ATTACK_ORIGINS
            .iter()
            .map(|origin| AttackLine {
                start_lat: origin.coordinates.latitude,
                start_lng: origin.coordinates.longitude,
                end_lat: target.latitude,
                end_lng: target.longitude,
                color: ATTACK_LINE_COLOR.to_string(),
            })
            .collect()
    }
}

// --- Esito della Scansione ---
// Scan Outcome

/// Everything a successful scan produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub domain: String,
    pub address: ResolvedAddress,
    pub info: IpInfo,
    pub coordinates: Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_input() {
        assert!(ScanRequest::parse("").is_none());
        assert!(ScanRequest::parse("   ").is_none());
    }

    #[test]
    fn request_keeps_plain_domains_and_strips_urls() {
        assert_eq!(ScanRequest::parse(" example.com ").unwrap().domain, "example.com");
        assert_eq!(
            ScanRequest::parse("https://www.example.com/login?next=1").unwrap().domain,
            "www.example.com"
        );
    }

    #[test]
    fn ip_info_accepts_numeric_coordinates() {
        let json = r#"{"ip":"1.1.1.1","city":"Sydney","country_name":"Australia",
            "org":"Cloudflare","region":"NSW","latitude":-33.86,"longitude":151.2}"#;
        let info: IpInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.latitude, "-33.86");
        assert_eq!(info.coordinates().unwrap(), Coordinates::new(-33.86, 151.2));
    }

    #[test]
    fn null_fields_read_as_empty_text() {
        let json = r#"{"ip":null,"city":null,"org":"Cloudflare","latitude":"1.0","longitude":"2.0"}"#;
        let info: IpInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.ip, "");
        assert_eq!(info.city, "");
        assert_eq!(info.org, "Cloudflare");
    }

    #[test]
    fn unparseable_coordinates_are_an_error() {
        let info = IpInfo { latitude: "north".into(), longitude: "1.0".into(), ..Default::default() };
        assert!(matches!(info.coordinates(), Err(LookupError::InvalidCoordinates { .. })));
    }

    #[test]
    fn attack_lines_have_one_arc_per_origin() {
        let target = Coordinates::new(42.1596, -70.8217);
        let lines = AttackLine::toward(target);

        assert_eq!(lines.len(), ATTACK_ORIGINS.len());
        assert_eq!(lines[2].start_lat, 51.5074);
        assert!(lines.iter().all(|l| l.end_lat == 42.1596 && l.end_lng == -70.8217));
        assert!(lines.iter().all(|l| l.color == ATTACK_LINE_COLOR));
    }

    #[test]
    fn history_entry_uses_export_field_names() {
        let entry = ScanHistoryEntry {
            domain: "example.com".into(),
            address: "93.184.216.34".into(),
            timestamp: "2024-03-10T15:42:31.000Z".into(),
            info: IpInfo::default(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["ip"], "93.184.216.34");
        assert!(value.get("result").is_some());
        assert!(value.get("address").is_none());
    }
}
