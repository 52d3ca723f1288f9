//! Exports for payroll and external analysis.

use super::{load_records, report, Context};
use crate::{
    db::closures::Closures,
    libs::{
        closure::ClosureId,
        employee::EmployeeId,
        export::{ExportFormat, Exporter},
        messages::Message,
        period::Period,
        role::Permission,
        store::ClockingFilter,
    },
    msg_error_anyhow, msg_info,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv", global = true)]
    format: ExportFormat,

    /// Output file (default: chronos_<kind>_<timestamp>.<ext>)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum ExportData {
    /// Monthly hours and overtime per employee
    Report {
        #[arg(short, long, default_value = "current")]
        period: Period,
        #[arg(short, long)]
        employee: Option<EmployeeId>,
    },
    /// A frozen closure with its per-employee lines
    Closure { id: ClosureId },
    /// Raw clocking records
    Clockings {
        #[arg(short, long)]
        period: Option<Period>,
        #[arg(short, long)]
        employee: Option<EmployeeId>,
    },
}

pub fn cmd(args: ExportArgs, ctx: &Context) -> Result<()> {
    let actor = ctx.actor()?;

    match args.data {
        ExportData::Report { period, employee } => {
            let report = report::build(period, actor.report_scope(employee))?;
            if report.is_empty() {
                msg_info!(Message::NoHoursForPeriod(period.label()));
                return Ok(());
            }
            Exporter::new(args.format, args.output, "report").export_report(&report)
        }
        ExportData::Closure { id } => {
            actor.require(Permission::ManageClosures)?;
            let closure = Closures::new()?
                .get_with_details(id)?
                .ok_or_else(|| msg_error_anyhow!(Message::ClosureNotFound(id)))?;
            Exporter::new(args.format, args.output, "closure").export_closure(&closure)
        }
        ExportData::Clockings { period, employee } => {
            let mut filter = ClockingFilter::all();
            filter.period = period;
            filter.employee_id = if actor.can(Permission::ManageAllClockings) {
                employee
            } else {
                Some(actor.employee_id)
            };

            let records = load_records(&filter)?;
            if records.is_empty() {
                msg_info!(Message::NoClockingsFound);
                return Ok(());
            }
            Exporter::new(args.format, args.output, "clockings").export_clockings(&records)
        }
    }
}
