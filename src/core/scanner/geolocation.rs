// src/core/scanner/geolocation.rs

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::errors::{DEFAULT_LOOKUP_REASON, LookupError};
use crate::core::models::IpInfo;

/// Maps an address to an approximate location and organisation.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn lookup(&self, address: &str) -> Result<IpInfo, LookupError>;
}

/// Provider body: the record itself plus the optional error flag and reason.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(flatten)]
    info: IpInfo,
}

/// Parses a provider body, turning an `error: true` payload into [`LookupError::Api`].
pub fn parse_geo_response(body: &str) -> Result<IpInfo, LookupError> {
    let response: GeoResponse = serde_json::from_str(body)?;
    if response.error {
        return Err(LookupError::Api {
            reason: response.reason.unwrap_or_else(|| DEFAULT_LOOKUP_REASON.to_string()),
        });
    }
    Ok(response.info)
}

/// Lookup backed by an ipapi-style HTTP API (`<base>/<ip>/json/`).
#[derive(Debug, Clone)]
pub struct IpApiLookup {
    client: reqwest::Client,
    base_url: String,
}

impl IpApiLookup {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    fn url_for(&self, address: &str) -> String {
        format!("{}/{}/json/", self.base_url.trim_end_matches('/'), address)
    }
}

#[async_trait]
impl GeoLookup for IpApiLookup {
    async fn lookup(&self, address: &str) -> Result<IpInfo, LookupError> {
        let url = self.url_for(address);
        info!(address, url = %url, "Looking up geolocation.");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| warn!(address, error = %e, "Geolocation request failed."))?;
        let status = response.status();
        let body = response.text().await?;
        debug!(address, status = %status, bytes = body.len(), "Geolocation response received.");

        // Rate limits come back as 4xx with an error payload, so parse before checking status.
        match parse_geo_response(&body) {
            Ok(_) if !status.is_success() => {
                warn!(address, status = %status, "Geolocation provider returned a non-success status.");
                Err(LookupError::Api { reason: format!("HTTP {status}") })
            }
            Ok(info) => {
                info!(address, city = %info.city, country = %info.country_name, "Geolocation found.");
                Ok(info)
            }
            Err(e) => {
                warn!(address, error = %e, "Geolocation lookup failed.");
                Err(e)
            }
        }
    }
}
