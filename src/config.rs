// src/config.rs

use directories::UserDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;

use crate::logging::PROJECT_NAME;

/// Public DNS-over-HTTPS JSON endpoint.
pub const DEFAULT_RESOLVER_URL: &str = "https://dns.google/resolve";
/// Public IP geolocation endpoint; the address and `/json/` are appended.
pub const DEFAULT_GEO_URL: &str = "https://ipapi.co";
/// Name of the file written by the history export.
pub const EXPORT_FILE_NAME: &str = "scan-history.json";

lazy_static! {
    pub static ref RESOLVER_URL_ENV: String = format!("{}_RESOLVER_URL", PROJECT_NAME.clone());
    pub static ref GEO_URL_ENV: String = format!("{}_GEO_URL", PROJECT_NAME.clone());
}

/// Runtime settings. Endpoints can be redirected through the environment,
/// presentation timings cannot.
#[derive(Debug, Clone)]
pub struct Settings {
    pub resolver_url: String,
    pub geo_url: String,
    pub user_agent: String,
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolver_url: DEFAULT_RESOLVER_URL.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            user_agent: format!("VanguardGlobe/{}", env!("CARGO_PKG_VERSION")),
            export_dir: default_export_dir(),
        }
    }
}

impl Settings {
    /// Defaults, overridden by any endpoint variables that are set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var(RESOLVER_URL_ENV.as_str()) {
            settings.resolver_url = url;
        }
        if let Ok(url) = std::env::var(GEO_URL_ENV.as_str()) {
            settings.geo_url = url;
        }
        settings
    }

    /// Full path the history export writes to.
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }
}

/// The user's download folder, like a browser download would use, else the working directory.
fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
