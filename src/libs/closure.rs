//! Monthly closures.
//!
//! A closure freezes one month's aggregated hours and overtime into an
//! audited snapshot. The flow is always preview first, then commit:
//!
//! 1. [`generate_preview`] computes what the closure would contain right now.
//!    It is pure and writes nothing.
//! 2. [`ClosureDesk`] remembers the selected period and the last preview,
//!    and refuses to close with a missing or stale one.
//! 3. `db::closures::Closures::commit` persists the snapshot atomically.
//!
//! ## Status lifecycle
//!
//! ```text
//! (none) --commit--> closed --reopen--> open <--manual--> reviewing
//!                      ^                  |                   |
//!                      +-----commit-------+-------------------+
//!                                          (previous row is voided)
//! ```

use crate::libs::aggregate::{aggregate, count_in_progress};
use crate::libs::clocking::ClockingRecord;
use crate::libs::employee::{Employee, EmployeeId};
use crate::libs::overtime::{apply_allowance, rollup, EmployeeMonthTotal, EmployeeStatus, MonthRollup};
use crate::libs::period::Period;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type ClosureId = i64;

#[derive(Debug, Error, PartialEq)]
pub enum ClosureError {
    #[error("generate a preview before closing the month")]
    NoPreview,
    #[error("the preview is for {preview} but {selected} is selected; generate a new preview")]
    StalePreview { selected: Period, preview: Period },
    #[error("{period} already has a closure in status {status}")]
    AlreadyClosed { period: Period, status: ClosureStatus },
    #[error("closure {0} not found")]
    NotFound(ClosureId),
    #[error("closure detail {0} not found")]
    DetailNotFound(i64),
    #[error("cannot change closure status from {from} to {to}")]
    InvalidTransition { from: ClosureStatus, to: ClosureStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureStatus {
    Open,
    Reviewing,
    Closed,
}

impl ClosureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosureStatus::Open => "open",
            ClosureStatus::Reviewing => "reviewing",
            ClosureStatus::Closed => "closed",
        }
    }

    /// Transitions allowed through `set_status`. `closed` is only reached by
    /// committing a fresh preview, from `open` or `reviewing`, and only left
    /// by reopening.
    pub fn can_set(&self, target: ClosureStatus) -> bool {
        matches!(
            (self, target),
            (ClosureStatus::Open, ClosureStatus::Reviewing) | (ClosureStatus::Reviewing, ClosureStatus::Open)
        )
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClosureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "open" => Ok(ClosureStatus::Open),
            "reviewing" => Ok(ClosureStatus::Reviewing),
            "closed" => Ok(ClosureStatus::Closed),
            other => Err(format!("unknown closure status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDetail {
    pub total: EmployeeMonthTotal,
    pub employee_email: Option<String>,
}

/// What a closure would contain if committed now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub period: Period,
    pub allowed_monthly_hours: f64,
    pub totals: MonthRollup,
    /// One entry per employee with completed records, in employee id order.
    pub details: Vec<PreviewDetail>,
    pub in_progress_count: usize,
}

impl Preview {
    pub fn has_in_progress(&self) -> bool {
        self.in_progress_count > 0
    }

    /// Fills in employee emails from the directory; unknown employees keep none.
    pub fn with_emails(mut self, employees: &[Employee]) -> Self {
        for detail in &mut self.details {
            detail.employee_email = employees
                .iter()
                .find(|e| e.id == Some(detail.total.employee_id))
                .map(|e| e.email.clone());
        }
        self
    }
}

/// Builds the preview for `period`. Identical inputs give identical output.
pub fn generate_preview(records: &[ClockingRecord], period: Period, allowance_hours: f64) -> Preview {
    let totals = aggregate(records, period, None);
    let rows = apply_allowance(&totals, allowance_hours);
    let month = rollup(&rows);

    Preview {
        period,
        allowed_monthly_hours: allowance_hours,
        totals: month,
        details: rows
            .into_iter()
            .map(|total| PreviewDetail {
                total,
                employee_email: None,
            })
            .collect(),
        in_progress_count: count_in_progress(records, period, None),
    }
}

/// The payload persisted by a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureSnapshot {
    pub preview: Preview,
    pub closed_by: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClosure {
    pub id: ClosureId,
    pub month: u32,
    pub year: i32,
    pub status: ClosureStatus,
    pub total_hours: f64,
    pub total_exceeded_hours: f64,
    pub total_employees: u32,
    pub employees_exceeded: u32,
    pub allowed_monthly_hours: f64,
    pub notes: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
    pub reopened_at: Option<DateTime<Utc>>,
    pub reopened_by: Option<String>,
    pub voided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyClosure {
    pub fn period(&self) -> Option<Period> {
        Period::new(self.month, self.year).ok()
    }

    pub fn is_voided(&self) -> bool {
        self.voided_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureDetail {
    pub id: i64,
    pub closure_id: ClosureId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub employee_email: Option<String>,
    pub total_hours: f64,
    pub allowed_hours: f64,
    pub exceeded_hours: f64,
    pub total_clockings: u32,
    pub status: EmployeeStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureWithDetails {
    pub closure: MonthlyClosure,
    /// Ordered by exceeded hours descending, then employee name.
    pub details: Vec<ClosureDetail>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosureFilter {
    pub year: Option<i32>,
    pub status: Option<ClosureStatus>,
    pub include_voided: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosureSummary {
    pub total_closures: u32,
    pub total_hours_closed: f64,
    pub total_exceeded_hours_closed: f64,
    pub average_exceeded_per_month: f64,
    pub last_closure: Option<MonthlyClosure>,
}

/// Summarizes the months currently closed. Voided and reopened closures are ignored.
pub fn summarize(closures: &[MonthlyClosure]) -> ClosureSummary {
    let closed: Vec<&MonthlyClosure> = closures
        .iter()
        .filter(|c| c.status == ClosureStatus::Closed && !c.is_voided())
        .collect();

    let total_hours_closed = closed.iter().map(|c| c.total_hours).sum();
    let total_exceeded_hours_closed: f64 = closed.iter().map(|c| c.total_exceeded_hours).sum();
    let average_exceeded_per_month = if closed.is_empty() {
        0.0
    } else {
        total_exceeded_hours_closed / closed.len() as f64
    };
    let last_closure = closed.iter().max_by_key(|c| (c.closed_at, c.id)).map(|c| (*c).clone());

    ClosureSummary {
        total_closures: closed.len() as u32,
        total_hours_closed,
        total_exceeded_hours_closed,
        average_exceeded_per_month,
        last_closure,
    }
}

/// Selected period plus the last preview generated for closing.
#[derive(Debug, Clone)]
pub struct ClosureDesk {
    selected: Period,
    preview: Option<Preview>,
}

impl ClosureDesk {
    pub fn new(selected: Period) -> Self {
        Self { selected, preview: None }
    }

    pub fn selected(&self) -> Period {
        self.selected
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Changes the selection. The last preview is kept but cannot be closed
    /// until it is regenerated for the new period.
    pub fn select(&mut self, period: Period) {
        self.selected = period;
    }

    /// Regenerates the preview for the selected period.
    pub fn refresh(&mut self, records: &[ClockingRecord], allowance_hours: f64, employees: &[Employee]) -> &Preview {
        self.preview
            .insert(generate_preview(records, self.selected, allowance_hours).with_emails(employees))
    }

    /// Checks that a preview exists and matches the selection.
    pub fn ready(&self) -> Result<&Preview, ClosureError> {
        match &self.preview {
            None => Err(ClosureError::NoPreview),
            Some(preview) if preview.period != self.selected => Err(ClosureError::StalePreview {
                selected: self.selected,
                preview: preview.period,
            }),
            Some(preview) => Ok(preview),
        }
    }

    /// Hands the snapshot to `commit`. The preview is consumed only when it succeeds.
    pub fn close<T, F>(&mut self, closed_by: &str, notes: Option<String>, commit: F) -> Result<T>
    where
        F: FnOnce(&ClosureSnapshot) -> Result<T>,
    {
        let snapshot = ClosureSnapshot {
            preview: self.ready()?.clone(),
            closed_by: closed_by.to_string(),
            notes,
        };
        let committed = commit(&snapshot)?;
        self.preview = None;
        Ok(committed)
    }
}
