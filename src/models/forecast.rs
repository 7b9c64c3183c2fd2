//! Formatted per-day forecast record

use serde::{Deserialize, Serialize};

/// One card of the 7-day list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DailyForecastEntry {
    /// ISO date exactly as received from the API
    pub date: String,
    /// Localized weekday label
    pub day_of_week: String,
    /// Rounded daily maximum in Celsius
    pub max_temp_c: Option<i64>,
    /// Rounded daily minimum in Celsius
    pub min_temp_c: Option<i64>,
    /// Icon asset filename
    pub icon_file: String,
}
