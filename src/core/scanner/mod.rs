// src/core/scanner/mod.rs

// Network side of a scan: the two lookups and the orchestrator that chains them.
pub mod geolocation;
pub mod resolver;

#[cfg(test)]
mod canned_server;

use tracing::info;

use crate::config::Settings;
use crate::core::errors::ScanError;
use crate::core::models::{ScanOutcome, ScanRequest};
use self::geolocation::{GeoLookup, IpApiLookup};
use self::resolver::{DohResolver, DomainResolver};

/// Chains the resolver and the geolocation lookup for one scan.
///
/// The two calls are sequential: the lookup needs the resolved address. There
/// are no retries; the first failure ends the scan.
#[derive(Debug, Clone)]
pub struct ScanOrchestrator<R, G> {
    resolver: R,
    geo: G,
}

/// The orchestrator wired to the public HTTP services.
pub type HttpScanOrchestrator = ScanOrchestrator<DohResolver, IpApiLookup>;

impl HttpScanOrchestrator {
    /// Builds both clients on one shared HTTP connection pool.
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self::new(
            DohResolver::new(client.clone(), settings.resolver_url.as_str()),
            IpApiLookup::new(client, settings.geo_url.as_str()),
        ))
    }
}

impl<R: DomainResolver, G: GeoLookup> ScanOrchestrator<R, G> {
    pub fn new(resolver: R, geo: G) -> Self {
        Self { resolver, geo }
    }

    /// Resolves the domain, geolocates the address, and parses the coordinates.
    pub async fn run(&self, request: &ScanRequest) -> Result<ScanOutcome, ScanError> {
        if request.domain.trim().is_empty() {
            return Err(ScanError::EmptyDomain);
        }

        let address = self.resolver.resolve(&request.domain).await?;
        let info = self.geo.lookup(&address).await?;
        let coordinates = info.coordinates()?;

        info!(
            domain = %request.domain,
            address = %address,
            lat = coordinates.latitude,
            lng = coordinates.longitude,
            "Scan lookups finished."
        );
        Ok(ScanOutcome { domain: request.domain.clone(), address, info, coordinates })
    }
}
