//! `tenki` - current weather and a 7-day forecast page for any city
//!
//! This library provides the request pipeline (geocoding, forecast, icon and
//! mascot rules, daily formatting), the page renderer and the axum router.

pub mod config;
pub mod error;
pub mod models;
pub mod open_meteo;
pub mod page;
pub mod render;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use crate::config::TenkiConfig;
pub use error::TenkiError;
pub use models::{CurrentWeather, DailyForecastEntry, ForecastResponse, Location, ViewModel};
pub use open_meteo::{ForecastClient, ForecastSource, Geocoder, GeocodingClient};
pub use page::{PageOptions, WeatherPageService};
pub use render::PageRenderer;
pub use weather::{IconCategory, IconDescriptor, Mascot, classify, describe, format_daily, select_mascot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TenkiError>;
