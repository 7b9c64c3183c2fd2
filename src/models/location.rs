//! Location model for a geocoded city

use serde::{Deserialize, Serialize};

/// A resolved place: canonical name, coordinates and country
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Canonical place name as returned by the geocoder
    pub name: String,
    /// Country name in the configured display language
    pub country: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String, country: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
