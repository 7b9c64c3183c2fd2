//! Turns the raw daily arrays into the cards of the 7-day list

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use super::classifier::icon_for;
use crate::models::{DailyForecastEntry, DailySeries, FALLBACK_WEATHER_CODE};

/// Upper bound on entries; the forecast call asks for exactly this many days
pub const MAX_FORECAST_DAYS: usize = 7;

/// Weekday labels indexed Monday = 0
pub const WEEKDAY_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Round to the nearest integer, ties to even
#[must_use]
pub fn round_temperature(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Build the daily cards. `dates` drives the length; shorter temperature or
/// code arrays leave the missing fields empty (temperatures) or cloudy (icons).
#[must_use]
pub fn format_daily(
    dates: &[String],
    max_temps: &[Option<f64>],
    min_temps: &[Option<f64>],
    codes: &[Option<i32>],
) -> Vec<DailyForecastEntry> {
    format_daily_with_fallback(dates, max_temps, min_temps, codes, Local::now().date_naive())
}

/// Same as [`format_daily`] but takes its arguments from a [`DailySeries`]
#[must_use]
pub fn format_series(series: &DailySeries) -> Vec<DailyForecastEntry> {
    format_daily(
        &series.dates,
        &series.max_temps,
        &series.min_temps,
        &series.weather_codes,
    )
}

/// `fallback_date` stands in for any date string that does not parse
pub(crate) fn format_daily_with_fallback(
    dates: &[String],
    max_temps: &[Option<f64>],
    min_temps: &[Option<f64>],
    codes: &[Option<i32>],
    fallback_date: NaiveDate,
) -> Vec<DailyForecastEntry> {
    dates
        .iter()
        .take(MAX_FORECAST_DAYS)
        .enumerate()
        .map(|(i, date)| {
            let parsed = parse_date(date).unwrap_or(fallback_date);
            let weekday = parsed.weekday().num_days_from_monday() as usize;
            let code = codes
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(FALLBACK_WEATHER_CODE);

            DailyForecastEntry {
                date: date.clone(),
                day_of_week: WEEKDAY_LABELS[weekday].to_string(),
                max_temp_c: max_temps.get(i).copied().flatten().map(round_temperature),
                min_temp_c: min_temps.get(i).copied().flatten().map(round_temperature),
                icon_file: icon_for(code).file,
            }
        })
        .collect()
}

/// Plain dates and ISO datetimes, with or without seconds or an offset
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
