//! Overtime policy over monthly totals.
//!
//! Attaches the monthly allowance to each aggregated employee total, derives
//! the exceeded hours and status, and rolls everything up into whole-month
//! figures. Values are kept exact; rounding to two decimals belongs to the
//! presentation layer only.

use crate::libs::aggregate::MonthlyTotal;
use crate::libs::employee::EmployeeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Normal,
    Exceeded,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Normal => "normal",
            EmployeeStatus::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(EmployeeStatus::Normal),
            "exceeded" => Ok(EmployeeStatus::Exceeded),
            other => Err(format!("unknown employee status '{}'", other)),
        }
    }
}

/// One employee's month with the allowance applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMonthTotal {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub total_hours: f64,
    pub total_clockings: u32,
    pub allowed_hours: f64,
    pub exceeded_hours: f64,
    pub status: EmployeeStatus,
}

/// Whole-month figures across all employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthRollup {
    pub total_hours: f64,
    pub total_exceeded_hours: f64,
    /// Employees with at least one completed record in the month.
    pub total_employees: u32,
    pub employees_exceeded: u32,
}

pub fn exceeded_hours(total_hours: f64, allowed_hours: f64) -> f64 {
    (total_hours - allowed_hours).max(0.0)
}

pub fn classify(exceeded_hours: f64) -> EmployeeStatus {
    if exceeded_hours > 0.0 {
        EmployeeStatus::Exceeded
    } else {
        EmployeeStatus::Normal
    }
}

/// Applies `allowance_hours` to every aggregated total, in employee id order.
pub fn apply_allowance(totals: &BTreeMap<EmployeeId, MonthlyTotal>, allowance_hours: f64) -> Vec<EmployeeMonthTotal> {
    totals
        .values()
        .map(|total| {
            let total_hours = total.total_hours();
            let exceeded = exceeded_hours(total_hours, allowance_hours);
            EmployeeMonthTotal {
                employee_id: total.employee_id,
                employee_name: total.employee_name.clone(),
                month: total.period.month,
                year: total.period.year,
                total_hours,
                total_clockings: total.total_clockings,
                allowed_hours: allowance_hours,
                exceeded_hours: exceeded,
                status: classify(exceeded),
            }
        })
        .collect()
}

/// Folds the rows, in order, into whole-month totals.
pub fn rollup(rows: &[EmployeeMonthTotal]) -> MonthRollup {
    rows.iter().fold(MonthRollup::default(), |mut acc, row| {
        acc.total_hours += row.total_hours;
        acc.total_exceeded_hours += row.exceeded_hours;
        acc.total_employees += 1;
        if row.status == EmployeeStatus::Exceeded {
            acc.employees_exceeded += 1;
        }
        acc
    })
}
