//! Global monthly hours allowance.
//!
//! One allowance applies to every employee and every month. Each update
//! fully replaces the previous value; when nothing has been configured the
//! engine falls back to [`DEFAULT_MONTHLY_HOURS`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MONTHLY_HOURS: f64 = 160.0;
pub const MIN_MONTHLY_HOURS: f64 = 1.0;
/// 31 days of 24 hours.
pub const MAX_MONTHLY_HOURS: f64 = 744.0;

#[derive(Debug, Error, PartialEq)]
pub enum AllowanceError {
    #[error("monthly hours must be between {min} and {max}, got {value}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAllowance {
    pub hours: f64,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl MonthlyAllowance {
    pub fn new(hours: f64, updated_by: &str) -> Result<Self, AllowanceError> {
        validate_hours(hours)?;
        Ok(Self {
            hours,
            updated_at: Some(Utc::now()),
            updated_by: Some(updated_by.to_string()),
        })
    }

    /// The value used when no allowance has been stored.
    pub fn fallback() -> Self {
        Self {
            hours: DEFAULT_MONTHLY_HOURS,
            updated_at: None,
            updated_by: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.updated_at.is_none()
    }
}

pub fn validate_hours(hours: f64) -> Result<(), AllowanceError> {
    if hours.is_finite() && (MIN_MONTHLY_HOURS..=MAX_MONTHLY_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(AllowanceError::OutOfRange {
            value: hours,
            min: MIN_MONTHLY_HOURS,
            max: MAX_MONTHLY_HOURS,
        })
    }
}

/// Hours to apply given an optional stored allowance.
pub fn effective_hours(stored: Option<&MonthlyAllowance>) -> f64 {
    stored.map_or(DEFAULT_MONTHLY_HOURS, |allowance| allowance.hours)
}
