//! Presentation formatting.
//!
//! The hours engine keeps exact values. Everything shown to a person or
//! written to an export goes through these helpers, which is the only place
//! values are rounded.

use chrono::{DateTime, Duration, Local, Utc};

/// Hours with two decimals, e.g. `165.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", round_hours(hours))
}

/// Rounds to two decimals for display and export cells.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// `HH:MM`, clamped to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Whole minutes, e.g. `95 min`.
pub fn format_minutes(duration: &Duration) -> String {
    format!("{} min", duration.num_minutes().max(0))
}

/// Timestamp in the local timezone, as shown in tables.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional_timestamp(instant: Option<&DateTime<Utc>>) -> String {
    instant.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
