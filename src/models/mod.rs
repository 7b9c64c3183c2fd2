//! Data models for the weather page
//!
//! This module contains the core domain models organized by concern:
//! - Location: geocoded place
//! - Weather: current conditions and raw daily series
//! - Forecast: formatted per-day entries
//! - View: the per-request page model

pub mod forecast;
pub mod location;
pub mod view;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::DailyForecastEntry;
pub use location::Location;
pub use view::{ViewModel, WeatherView};
pub use weather::{CurrentWeather, DailySeries, FALLBACK_WEATHER_CODE, ForecastResponse};
