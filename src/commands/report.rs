use super::{allowance_hours, load_records, Context};
use crate::{
    libs::{employee::EmployeeId, messages::Message, period::Period, report::MonthlyReport, store::ClockingFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// YYYY-MM, MM/YYYY or "current"
    #[arg(short, long, default_value = "current")]
    period: Period,
    /// Only this employee (ignored unless you may view all reports)
    #[arg(short, long)]
    employee: Option<EmployeeId>,
}

pub fn cmd(args: ReportArgs, ctx: &Context) -> Result<()> {
    let actor = ctx.actor()?;
    let scope = actor.report_scope(args.employee);

    let report = build(args.period, scope)?;
    if report.is_empty() {
        msg_info!(Message::NoHoursForPeriod(args.period.label()));
        return Ok(());
    }

    msg_print!(Message::ReportHeader(args.period.label()), true);
    View::report(&report)
}

/// Builds the report for `period` from the local database.
pub(crate) fn build(period: Period, scope: Option<EmployeeId>) -> Result<MonthlyReport> {
    let mut filter = ClockingFilter::all().period(period);
    filter.employee_id = scope;

    let records = load_records(&filter)?;
    Ok(MonthlyReport::build(&records, period, allowance_hours()?, scope))
}
