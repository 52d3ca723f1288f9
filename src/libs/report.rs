//! Monthly report assembly.
//!
//! A report is the overtime policy output for one period, optionally narrowed
//! to one employee, with the whole-month rollup computed from the same rows.

use crate::libs::aggregate::aggregate;
use crate::libs::clocking::ClockingRecord;
use crate::libs::employee::EmployeeId;
use crate::libs::formatter::round_hours;
use crate::libs::overtime::{apply_allowance, rollup, EmployeeMonthTotal, MonthRollup};
use crate::libs::period::Period;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub period: Period,
    pub allowed_hours: f64,
    pub rows: Vec<EmployeeMonthTotal>,
    pub totals: MonthRollup,
}

/// One line of the report export, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub employee_name: String,
    pub period: String,
    pub total_hours: f64,
    pub exceeded_hours: f64,
}

impl MonthlyReport {
    pub fn build(records: &[ClockingRecord], period: Period, allowed_hours: f64, employee_filter: Option<EmployeeId>) -> Self {
        let totals = aggregate(records, period, employee_filter);
        let rows = apply_allowance(&totals, allowed_hours);
        let totals = rollup(&rows);

        Self {
            period,
            allowed_hours,
            rows,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn export_rows(&self) -> Vec<ReportRow> {
        self.rows
            .iter()
            .map(|row| ReportRow {
                employee_name: row.employee_name.clone(),
                period: self.period.to_string(),
                total_hours: round_hours(row.total_hours),
                exceeded_hours: round_hours(row.exceeded_hours),
            })
            .collect()
    }
}
