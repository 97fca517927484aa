// src/core/terrain.rs

//! Rough descriptors of a location, shown in the globe's details panel.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TerrainBand {
    Tropical,
    Subtropical,
    Temperate,
    Polar,
}

/// Climate band from latitude alone.
pub fn terrain_band(latitude: f64) -> TerrainBand {
    let lat = latitude.abs();
    if lat < 23.5 {
        TerrainBand::Tropical
    } else if lat < 35.0 {
        TerrainBand::Subtropical
    } else if lat < 66.5 {
        TerrainBand::Temperate
    } else {
        TerrainBand::Polar
    }
}

/// Solar time offset from longitude (four minutes per degree), e.g. `UTC-4:44`.
pub fn solar_utc_offset(longitude: f64) -> String {
    let minutes = (longitude * 4.0).floor() as i64;
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("UTC{}{}:{:02}", sign, minutes / 60, minutes % 60)
}
