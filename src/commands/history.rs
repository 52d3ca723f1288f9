use super::{allowance_hours, load_records, Context};
use crate::{
    db::employees::Employees,
    libs::{employee::EmployeeId, messages::Message, period::Period, role::Permission, stats::EmployeeHistory, store::ClockingFilter, view::View},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Defaults to the acting employee
    employee: Option<EmployeeId>,
    /// Limit to one month
    #[arg(short, long)]
    period: Option<Period>,
    /// Also list the clockings
    #[arg(short, long)]
    clockings: bool,
}

pub fn cmd(args: HistoryArgs, ctx: &Context) -> Result<()> {
    let actor = ctx.actor()?;
    let employee_id = args.employee.unwrap_or(actor.employee_id);
    if employee_id != actor.employee_id {
        actor.require(Permission::ViewHistory)?;
    }

    let employee = Employees::new()?
        .get(employee_id)?
        .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(employee_id)))?;

    let mut filter = ClockingFilter::all().employee(employee_id);
    filter.period = args.period;
    let records = load_records(&filter)?;

    if records.is_empty() {
        msg_info!(Message::NoClockingsFound);
        return Ok(());
    }

    let history = EmployeeHistory::compute(&records, employee_id, args.period, allowance_hours()?);
    msg_print!(Message::HistoryHeader(employee.name), true);
    View::history(&history)?;

    if args.clockings {
        View::clockings(&records)?;
    }
    Ok(())
}
