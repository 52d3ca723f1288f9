//! Dashboard KPIs and employee history statistics.
//!
//! Both views are thin layers over the aggregator and the overtime policy, so
//! the hours they show always agree with the monthly report for the same
//! period.

use crate::libs::aggregate::aggregate;
use crate::libs::clocking::{duration_seconds, hours, ClockingRecord};
use crate::libs::employee::EmployeeId;
use crate::libs::overtime::{apply_allowance, rollup, EmployeeMonthTotal, EmployeeStatus};
use crate::libs::period::Period;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

pub const RECENT_CLOCKINGS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub period: Period,
    /// Records started in the period, open or completed.
    pub clockings_this_month: usize,
    pub active_clockings: usize,
    pub average_duration: Duration,
    pub total_hours: f64,
    pub total_exceeded_hours: f64,
    pub employees_exceeded: u32,
    pub recent: Vec<ClockingRecord>,
}

impl DashboardStats {
    pub fn compute(records: &[ClockingRecord], period: Period, allowance_hours: f64) -> Self {
        let rows = apply_allowance(&aggregate(records, period, None), allowance_hours);
        let month = rollup(&rows);

        let in_period: Vec<&ClockingRecord> = records.iter().filter(|r| period.contains(r.start_time)).collect();
        let completed: Vec<&ClockingRecord> = in_period.iter().copied().filter(|r| !r.is_open()).collect();

        let mut recent: Vec<ClockingRecord> = records.to_vec();
        recent.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        recent.truncate(RECENT_CLOCKINGS);

        Self {
            period,
            clockings_this_month: in_period.len(),
            active_clockings: records.iter().filter(|r| r.is_open()).count(),
            average_duration: average(&completed),
            total_hours: month.total_hours,
            total_exceeded_hours: month.total_exceeded_hours,
            employees_exceeded: month.employees_exceeded,
            recent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeHistory {
    pub employee_id: EmployeeId,
    pub total_clockings: usize,
    pub total_hours: f64,
    pub average_duration: Duration,
    pub last_activity: Option<DateTime<Utc>>,
    /// One entry per month with completed records, newest first.
    pub months: Vec<EmployeeMonthTotal>,
}

impl EmployeeHistory {
    /// History of one employee, optionally limited to a single period.
    pub fn compute(records: &[ClockingRecord], employee_id: EmployeeId, period: Option<Period>, allowance_hours: f64) -> Self {
        let own: Vec<&ClockingRecord> = records
            .iter()
            .filter(|r| r.employee_id == employee_id && period.map_or(true, |p| p.contains(r.start_time)))
            .collect();
        let completed: Vec<&ClockingRecord> = own.iter().copied().filter(|r| !r.is_open()).collect();

        let periods: BTreeSet<Period> = completed.iter().map(|r| Period::of(r.start_time)).collect();
        let months: Vec<EmployeeMonthTotal> = periods
            .into_iter()
            .rev()
            .flat_map(|p| apply_allowance(&aggregate(records, p, Some(employee_id)), allowance_hours))
            .collect();

        Self {
            employee_id,
            total_clockings: own.len(),
            total_hours: hours(completed.iter().map(|r| duration_seconds(r)).sum()),
            average_duration: average(&completed),
            last_activity: own.iter().map(|r| r.end_time.unwrap_or(r.start_time)).max(),
            months,
        }
    }

    pub fn months_exceeded(&self) -> usize {
        self.months.iter().filter(|m| m.status == EmployeeStatus::Exceeded).count()
    }
}

fn average(completed: &[&ClockingRecord]) -> Duration {
    if completed.is_empty() {
        return Duration::zero();
    }
    let total: i64 = completed.iter().map(|r| duration_seconds(r)).sum();
    Duration::seconds(total / completed.len() as i64)
}
