//! Monthly hours aggregation.
//!
//! Groups the completed clockings of one calendar month by employee and sums
//! their durations. This is the single place the application turns raw
//! records into per-employee monthly totals; reports, dashboard KPIs,
//! employee history and closure previews all build on it.
//!
//! ## Rules
//!
//! - Only completed records whose start time falls inside the period count
//! - Open records never contribute to hours or clocking counts
//! - An employee without completed records in the period is absent from the
//!   result, never present with zero
//! - Durations are summed in whole seconds, so the result does not depend on
//!   the order records arrive in

use crate::libs::clocking::{duration_seconds, hours, ClockingRecord};
use crate::libs::employee::EmployeeId;
use crate::libs::period::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated hours of one employee in one period, before any allowance is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub period: Period,
    pub total_seconds: i64,
    pub total_clockings: u32,
}

impl MonthlyTotal {
    pub fn total_hours(&self) -> f64 {
        hours(self.total_seconds)
    }
}

fn in_scope(record: &ClockingRecord, period: Period, employee_filter: Option<EmployeeId>) -> bool {
    period.contains(record.start_time) && employee_filter.map_or(true, |id| record.employee_id == id)
}

/// Aggregates completed records of `period`, optionally restricted to one employee.
pub fn aggregate(records: &[ClockingRecord], period: Period, employee_filter: Option<EmployeeId>) -> BTreeMap<EmployeeId, MonthlyTotal> {
    let mut totals: BTreeMap<EmployeeId, MonthlyTotal> = BTreeMap::new();
    // Earliest (start, id) seen per employee, used to pick the display name.
    let mut name_keys: BTreeMap<EmployeeId, (i64, i64)> = BTreeMap::new();

    for record in records.iter().filter(|r| !r.is_open() && in_scope(r, period, employee_filter)) {
        let key = (record.start_time.timestamp(), record.id.unwrap_or(i64::MAX));
        let entry = totals.entry(record.employee_id).or_insert_with(|| MonthlyTotal {
            employee_id: record.employee_id,
            employee_name: record.employee_name.clone(),
            period,
            total_seconds: 0,
            total_clockings: 0,
        });

        entry.total_seconds += duration_seconds(record);
        entry.total_clockings += 1;

        let earliest = name_keys.entry(record.employee_id).or_insert(key);
        if key <= *earliest {
            *earliest = key;
            entry.employee_name = record.employee_name.clone();
        }
    }

    totals
}

/// Number of open records started within `period`.
pub fn count_in_progress(records: &[ClockingRecord], period: Period, employee_filter: Option<EmployeeId>) -> usize {
    records.iter().filter(|r| r.is_open() && in_scope(r, period, employee_filter)).count()
}
