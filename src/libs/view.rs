use crate::libs::clocking::{duration, ClockingRecord};
use crate::libs::closure::{ClosureSummary, ClosureWithDetails, MonthlyClosure, Preview};
use crate::libs::employee::{join_roles, Employee};
use crate::libs::formatter::{format_duration, format_hours, format_minutes, format_optional_timestamp, format_timestamp};
use crate::libs::overtime::EmployeeMonthTotal;
use crate::libs::report::MonthlyReport;
use crate::libs::stats::{DashboardStats, EmployeeHistory};
use anyhow::Result;
use prettytable::{row, Table};

/// Console tables.
pub struct View {}

impl View {
    pub fn clockings(records: &[ClockingRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "START", "END", "DURATION", "STATUS", "DESCRIPTION"]);
        for record in records {
            table.add_row(row![
                record.id.unwrap_or_default(),
                record.employee_name,
                format_timestamp(&record.start_time),
                format_optional_timestamp(record.end_time.as_ref()),
                format_duration(&duration(record)),
                record.status(),
                record.description.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "ROLES"]);
        for employee in employees {
            table.add_row(row![employee.id.unwrap_or_default(), employee.name, employee.email, join_roles(&employee.roles)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn report(report: &MonthlyReport) -> Result<()> {
        let mut table = month_totals_table(&report.rows);
        table.add_row(row![
            "",
            "TOTAL",
            format_hours(report.totals.total_hours),
            "",
            format_hours(report.totals.total_exceeded_hours),
            "",
            format!("{}/{}", report.totals.employees_exceeded, report.totals.total_employees)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn preview(preview: &Preview) -> Result<()> {
        let rows: Vec<EmployeeMonthTotal> = preview.details.iter().map(|d| d.total.clone()).collect();
        month_totals_table(&rows).printstd();

        let mut totals = Table::new();
        totals.add_row(row!["PERIOD", preview.period.label()]);
        totals.add_row(row!["ALLOWED HOURS", format_hours(preview.allowed_monthly_hours)]);
        totals.add_row(row!["TOTAL HOURS", format_hours(preview.totals.total_hours)]);
        totals.add_row(row!["EXCEEDED HOURS", format_hours(preview.totals.total_exceeded_hours)]);
        totals.add_row(row!["EMPLOYEES", preview.totals.total_employees]);
        totals.add_row(row!["EMPLOYEES EXCEEDED", preview.totals.employees_exceeded]);
        totals.add_row(row!["IN PROGRESS", preview.in_progress_count]);
        totals.printstd();

        Ok(())
    }

    pub fn closures(closures: &[MonthlyClosure]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PERIOD", "STATUS", "TOTAL HOURS", "EXCEEDED", "EMPLOYEES", "CLOSED AT", "CLOSED BY"]);
        for closure in closures {
            let status = if closure.is_voided() {
                format!("{} (voided)", closure.status)
            } else {
                closure.status.to_string()
            };
            table.add_row(row![
                closure.id,
                format!("{:04}-{:02}", closure.year, closure.month),
                status,
                format_hours(closure.total_hours),
                format_hours(closure.total_exceeded_hours),
                format!("{}/{}", closure.employees_exceeded, closure.total_employees),
                format_optional_timestamp(closure.closed_at.as_ref()),
                closure.closed_by.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn closure(closure: &ClosureWithDetails) -> Result<()> {
        let c = &closure.closure;
        let mut header = Table::new();
        header.add_row(row!["ID", c.id]);
        header.add_row(row!["PERIOD", format!("{:04}-{:02}", c.year, c.month)]);
        header.add_row(row!["STATUS", c.status]);
        header.add_row(row!["ALLOWED HOURS", format_hours(c.allowed_monthly_hours)]);
        header.add_row(row!["TOTAL HOURS", format_hours(c.total_hours)]);
        header.add_row(row!["EXCEEDED HOURS", format_hours(c.total_exceeded_hours)]);
        header.add_row(row!["EMPLOYEES EXCEEDED", format!("{}/{}", c.employees_exceeded, c.total_employees)]);
        header.add_row(row!["CLOSED", format!("{} {}", format_optional_timestamp(c.closed_at.as_ref()), c.closed_by.clone().unwrap_or_default())]);
        if c.reopened_at.is_some() {
            header.add_row(row!["REOPENED", format!("{} {}", format_optional_timestamp(c.reopened_at.as_ref()), c.reopened_by.clone().unwrap_or_default())]);
        }
        header.add_row(row!["NOTES", c.notes.clone().unwrap_or_default()]);
        header.printstd();

        let mut table = Table::new();
        table.add_row(row!["DETAIL", "EMPLOYEE", "EMAIL", "TOTAL", "ALLOWED", "EXCEEDED", "CLOCKINGS", "STATUS", "NOTES"]);
        for detail in &closure.details {
            table.add_row(row![
                detail.id,
                detail.employee_name,
                detail.employee_email.clone().unwrap_or_default(),
                format_hours(detail.total_hours),
                format_hours(detail.allowed_hours),
                format_hours(detail.exceeded_hours),
                detail.total_clockings,
                detail.status,
                detail.notes.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn closure_summary(summary: &ClosureSummary) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["CLOSED MONTHS", summary.total_closures]);
        table.add_row(row!["HOURS CLOSED", format_hours(summary.total_hours_closed)]);
        table.add_row(row!["EXCEEDED HOURS CLOSED", format_hours(summary.total_exceeded_hours_closed)]);
        table.add_row(row!["AVERAGE EXCEEDED / MONTH", format_hours(summary.average_exceeded_per_month)]);
        let last = summary
            .last_closure
            .as_ref()
            .map(|c| format!("{:04}-{:02}", c.year, c.month))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row!["LAST CLOSURE", last]);
        table.printstd();

        Ok(())
    }

    pub fn dashboard(stats: &DashboardStats) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["PERIOD", stats.period.label()]);
        table.add_row(row!["CLOCKINGS THIS MONTH", stats.clockings_this_month]);
        table.add_row(row!["ACTIVE CLOCKINGS", stats.active_clockings]);
        table.add_row(row!["AVERAGE DURATION", format_minutes(&stats.average_duration)]);
        table.add_row(row!["TOTAL HOURS", format_hours(stats.total_hours)]);
        table.add_row(row!["EXCEEDED HOURS", format_hours(stats.total_exceeded_hours)]);
        table.add_row(row!["EMPLOYEES OVER ALLOWANCE", stats.employees_exceeded]);
        table.printstd();

        if !stats.recent.is_empty() {
            Self::clockings(&stats.recent)?;
        }

        Ok(())
    }

    pub fn history(history: &EmployeeHistory) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["TOTAL CLOCKINGS", history.total_clockings]);
        table.add_row(row!["TOTAL HOURS", format_hours(history.total_hours)]);
        table.add_row(row!["AVERAGE DURATION", format_minutes(&history.average_duration)]);
        table.add_row(row!["LAST ACTIVITY", format_optional_timestamp(history.last_activity.as_ref())]);
        table.add_row(row!["MONTHS OVER ALLOWANCE", history.months_exceeded()]);
        table.printstd();

        if !history.months.is_empty() {
            month_totals_table(&history.months).printstd();
        }

        Ok(())
    }
}

fn month_totals_table(rows: &[EmployeeMonthTotal]) -> Table {
    let mut table = Table::new();

    table.add_row(row!["ID", "EMPLOYEE", "TOTAL HOURS", "ALLOWED", "EXCEEDED", "CLOCKINGS", "STATUS"]);
    for total in rows {
        table.add_row(row![
            total.employee_id,
            format!("{} ({:04}-{:02})", total.employee_name, total.year, total.month),
            format_hours(total.total_hours),
            format_hours(total.allowed_hours),
            format_hours(total.exceeded_hours),
            total.total_clockings,
            total.status
        ]);
    }

    table
}
