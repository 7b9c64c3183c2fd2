//! Presentation rules applied to forecast data
//!
//! - classifier: weather code to sun/cloud/rain icon
//! - mascot: which character accompanies the current weather
//! - formatter: daily arrays to the 7-day card list

pub mod classifier;
pub mod formatter;
pub mod mascot;

pub use classifier::{IconCategory, IconDescriptor, RAIN_CODES, classify, describe, icon_for};
pub use formatter::{MAX_FORECAST_DAYS, WEEKDAY_LABELS, format_daily, format_series, round_temperature};
pub use mascot::{COLD_THRESHOLD_C, Mascot, select_mascot};
