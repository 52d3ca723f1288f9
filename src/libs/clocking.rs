//! Clocking records and the duration calculator.
//!
//! A clocking is one start/stop work-time record for one employee. Its status
//! is derived from the presence of an end time, so a record can never claim to
//! be completed without one.
//!
//! ## Duration Rules
//!
//! - An open record (no end time) contributes zero
//! - A completed record contributes `end - start`
//! - An anomalous record (end before start) is clamped to zero, never negative
//!
//! ```rust
//! use chronos::libs::clocking::{duration_seconds, ClockingRecord};
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
//! let mut record = ClockingRecord::new(3, "Juan", start, None);
//! assert_eq!(duration_seconds(&record), 0);
//!
//! record.complete(Utc.with_ymd_and_hms(2025, 3, 10, 17, 30, 0).unwrap()).unwrap();
//! assert_eq!(duration_seconds(&record), 8 * 3600 + 1800);
//! ```

use crate::libs::employee::EmployeeId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ClockingId = i64;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockingError {
    #[error("clocking {0} is already completed")]
    AlreadyCompleted(ClockingId),
    #[error("clocking {0} not found")]
    NotFound(ClockingId),
    #[error("employee {0} already has a clocking in progress")]
    AlreadyInProgress(EmployeeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockingStatus {
    InProgress,
    Completed,
}

impl fmt::Display for ClockingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockingStatus::InProgress => write!(f, "in-progress"),
            ClockingStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockingRecord {
    pub id: Option<ClockingId>,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClockingRecord {
    /// Creates an open record owned by `employee_id`.
    pub fn new(employee_id: EmployeeId, employee_name: &str, start_time: DateTime<Utc>, description: Option<String>) -> Self {
        Self {
            id: None,
            employee_id,
            employee_name: employee_name.to_string(),
            start_time,
            end_time: None,
            description,
        }
    }

    pub fn status(&self) -> ClockingStatus {
        match self.end_time {
            Some(_) => ClockingStatus::Completed,
            None => ClockingStatus::InProgress,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// A completed record whose end precedes its start.
    pub fn is_anomalous(&self) -> bool {
        matches!(self.end_time, Some(end) if end < self.start_time)
    }

    /// Sets the end time. A record can be completed only once.
    pub fn complete(&mut self, end_time: DateTime<Utc>) -> Result<(), ClockingError> {
        if self.end_time.is_some() {
            return Err(ClockingError::AlreadyCompleted(self.id.unwrap_or_default()));
        }
        self.end_time = Some(end_time);
        Ok(())
    }
}

/// Elapsed time of a record; zero for open and anomalous records.
pub fn duration(record: &ClockingRecord) -> Duration {
    match record.end_time {
        Some(end) if end > record.start_time => end - record.start_time,
        _ => Duration::zero(),
    }
}

pub fn duration_seconds(record: &ClockingRecord) -> i64 {
    duration(record).num_seconds()
}

/// Converts whole seconds into fractional hours.
pub fn hours(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}
