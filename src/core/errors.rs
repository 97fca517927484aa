// src/core/errors.rs

use thiserror::Error;

/// Message shown for every failed scan, whatever went wrong underneath.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch domain information. Please try again.";

/// Reason used when the geolocation provider flags an error without explaining it.
pub const DEFAULT_LOOKUP_REASON: &str = "Failed to fetch IP info";

/// Failures of the DNS-over-HTTPS lookup.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no IP address found for {domain}")]
    NotFound { domain: String },
    #[error("resolver request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("resolver returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures of the IP geolocation lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("geolocation provider error: {reason}")]
    Api { reason: String },
    #[error("geolocation request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("geolocation provider returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("coordinates '{latitude}', '{longitude}' are not numbers")]
    InvalidCoordinates { latitude: String, longitude: String },
}

/// Everything that can end a scan early.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("empty domain")]
    EmptyDomain,
    #[error(transparent)]
    Resolution(#[from] ResolveError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ScanError {
    /// The text the user sees. Both failure kinds collapse to the same message.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
