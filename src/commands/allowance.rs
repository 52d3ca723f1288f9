use super::Context;
use crate::{
    db::allowance::Allowances,
    libs::{formatter::format_hours, formatter::format_optional_timestamp, messages::Message, role::Permission},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AllowanceArgs {
    #[command(subcommand)]
    command: Option<AllowanceCommand>,
}

#[derive(Debug, Subcommand)]
enum AllowanceCommand {
    Show,
    /// Replace the monthly allowance (1 to 744 hours)
    Set { hours: f64 },
}

pub fn cmd(args: AllowanceArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(AllowanceCommand::Show) {
        AllowanceCommand::Show => handle_show(),
        AllowanceCommand::Set { hours } => handle_set(ctx, hours),
    }
}

fn handle_show() -> Result<()> {
    let allowance = Allowances::new()?.current()?;

    msg_print!(Message::AllowanceCurrent(format_hours(allowance.hours)));
    if allowance.is_fallback() {
        msg_info!(Message::AllowanceIsDefault);
    } else {
        msg_print!(Message::AllowanceUpdated(
            format_optional_timestamp(allowance.updated_at.as_ref()),
            allowance.updated_by.unwrap_or_default()
        ));
    }
    Ok(())
}

fn handle_set(ctx: &Context, hours: f64) -> Result<()> {
    let actor = ctx.actor()?;
    actor.require(Permission::ConfigureAllowance)?;

    let allowance = Allowances::new()?.set(hours, &actor.name)?;
    msg_success!(Message::AllowanceSaved(format_hours(allowance.hours)));
    Ok(())
}
