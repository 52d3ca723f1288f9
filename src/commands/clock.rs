use super::Context;
use crate::{
    db::{clockings::Clockings, employees::Employees},
    libs::{
        clocking::{duration, ClockingId},
        employee::EmployeeId,
        formatter::format_duration,
        messages::Message,
        period::Period,
        role::Permission,
        store::{delete_clocking, end_clocking, start_clocking, ClockingFilter, ClockingStore},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClockArgs {
    #[command(subcommand)]
    command: ClockCommand,
}

#[derive(Debug, Subcommand)]
enum ClockCommand {
    /// Open a clocking now
    Start {
        /// Clock on behalf of another employee
        #[arg(short, long)]
        employee: Option<EmployeeId>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Complete a clocking now
    End {
        /// Defaults to the acting employee's open clocking
        id: Option<ClockingId>,
    },
    List {
        #[arg(short, long)]
        employee: Option<EmployeeId>,
        /// YYYY-MM, MM/YYYY or "current"
        #[arg(short, long)]
        period: Option<Period>,
        /// Only clockings in progress
        #[arg(long)]
        open: bool,
    },
    Delete {
        id: ClockingId,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ClockArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ClockCommand::Start { employee, description } => handle_start(ctx, employee, description),
        ClockCommand::End { id } => handle_end(ctx, id),
        ClockCommand::List { employee, period, open } => handle_list(ctx, employee, period, open),
        ClockCommand::Delete { id, yes } => handle_delete(ctx, id, yes),
    }
}

fn handle_start(ctx: &Context, employee: Option<EmployeeId>, description: Option<String>) -> Result<()> {
    let actor = ctx.actor()?;
    let employee_id = employee.unwrap_or(actor.employee_id);
    let owner = Employees::new()?
        .get(employee_id)?
        .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(employee_id)))?;

    let record = start_clocking(&mut Clockings::new()?, &actor, employee_id, &owner.name, Utc::now(), description)?;
    msg_success!(Message::ClockingStarted(record.id.unwrap_or_default(), owner.name));
    Ok(())
}

fn handle_end(ctx: &Context, id: Option<ClockingId>) -> Result<()> {
    let actor = ctx.actor()?;
    let mut store = Clockings::new()?;

    let id = match id {
        Some(id) => id,
        None => store
            .list(&ClockingFilter::all().employee(actor.employee_id).open())?
            .first()
            .and_then(|record| record.id)
            .ok_or_else(|| msg_error_anyhow!(Message::NoClockingInProgress))?,
    };

    let record = end_clocking(&mut store, &actor, id, Utc::now())?;
    msg_success!(Message::ClockingEnded(id, format_duration(&duration(&record))));
    Ok(())
}

fn handle_list(ctx: &Context, employee: Option<EmployeeId>, period: Option<Period>, open: bool) -> Result<()> {
    let actor = ctx.actor()?;

    let mut filter = ClockingFilter::all();
    filter.period = period;
    filter.open_only = open;
    filter.employee_id = if actor.can(Permission::ManageAllClockings) {
        employee
    } else {
        Some(actor.employee_id)
    };

    let records = Clockings::new()?.list(&filter)?;
    if records.is_empty() {
        msg_info!(Message::NoClockingsFound);
        return Ok(());
    }

    msg_print!(Message::ClockingsHeader(records.len()), true);
    View::clockings(&records)
}

fn handle_delete(ctx: &Context, id: ClockingId, yes: bool) -> Result<()> {
    let actor = ctx.actor()?;
    let mut store = Clockings::new()?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteClocking(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    delete_clocking(&mut store, &actor, id)?;
    msg_success!(Message::ClockingDeleted(id));
    Ok(())
}
