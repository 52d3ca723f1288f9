use super::{allowance_hours, load_records, Context};
use crate::{
    libs::{messages::Message, period::Period, stats::DashboardStats, store::ClockingFilter, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(short, long, default_value = "current")]
    period: Period,
}

pub fn cmd(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let actor = ctx.actor()?;

    let mut filter = ClockingFilter::all();
    filter.employee_id = actor.report_scope(None);
    let records = load_records(&filter)?;

    let stats = DashboardStats::compute(&records, args.period, allowance_hours()?);
    msg_print!(Message::DashboardHeader(actor.name, args.period.label()), true);
    View::dashboard(&stats)
}
