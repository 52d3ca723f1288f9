use super::{allowance_hours, load_records, Context};
use crate::{
    db::{closures::Closures, employees::Employees},
    libs::{
        closure::{ClosureDesk, ClosureFilter, ClosureId, ClosureStatus},
        messages::Message,
        period::Period,
        role::{Actor, Permission},
        store::ClockingFilter,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClosureArgs {
    #[command(subcommand)]
    command: ClosureCommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ManualStatus {
    Open,
    Reviewing,
}

impl From<ManualStatus> for ClosureStatus {
    fn from(status: ManualStatus) -> Self {
        match status {
            ManualStatus::Open => ClosureStatus::Open,
            ManualStatus::Reviewing => ClosureStatus::Reviewing,
        }
    }
}

#[derive(Debug, Subcommand)]
enum ClosureCommand {
    /// Compute the totals a closure would freeze
    Preview {
        #[arg(default_value = "current")]
        period: Period,
    },
    /// Freeze a month's totals
    Close {
        period: Period,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(short, long)]
        yes: bool,
    },
    List {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = parse_status)]
        status: Option<ClosureStatus>,
        /// Include voided closures
        #[arg(long)]
        all: bool,
    },
    Show {
        id: ClosureId,
    },
    /// Reopen a closed month
    Reopen {
        id: ClosureId,
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the closure status of a month, or move it between open and reviewing
    Status {
        period: Period,
        #[arg(long, value_enum)]
        set: Option<ManualStatus>,
    },
    /// Replace the notes of a closure (omit to clear)
    Notes {
        id: ClosureId,
        notes: Option<String>,
    },
    /// Replace the notes of one employee's closure line (omit to clear)
    DetailNotes {
        detail_id: i64,
        notes: Option<String>,
    },
    Summary,
}

fn parse_status(value: &str) -> Result<ClosureStatus, String> {
    value.parse()
}

pub fn cmd(args: ClosureArgs, ctx: &Context) -> Result<()> {
    let actor = ctx.actor()?;
    actor.require(Permission::ManageClosures)?;

    match args.command {
        ClosureCommand::Preview { period } => handle_preview(period),
        ClosureCommand::Close { period, notes, yes } => handle_close(&actor, period, notes, yes),
        ClosureCommand::List { year, status, all } => handle_list(year, status, all),
        ClosureCommand::Show { id } => handle_show(id),
        ClosureCommand::Reopen { id, yes } => handle_reopen(&actor, id, yes),
        ClosureCommand::Status { period, set } => handle_status(period, set),
        ClosureCommand::Notes { id, notes } => {
            Closures::new()?.update_notes(id, notes.as_deref())?;
            msg_success!(Message::ClosureNotesUpdated(id));
            Ok(())
        }
        ClosureCommand::DetailNotes { detail_id, notes } => {
            Closures::new()?.update_detail_notes(detail_id, notes.as_deref())?;
            msg_success!(Message::ClosureDetailNotesUpdated(detail_id));
            Ok(())
        }
        ClosureCommand::Summary => View::closure_summary(&Closures::new()?.summary()?),
    }
}

/// Builds a desk holding a fresh preview for `period`.
fn prepare(period: Period) -> Result<ClosureDesk> {
    let records = load_records(&ClockingFilter::all().period(period))?;
    let employees = Employees::new()?.list()?;

    let mut desk = ClosureDesk::new(period);
    let preview = desk.refresh(&records, allowance_hours()?, &employees);
    if preview.has_in_progress() {
        msg_warning!(Message::ClockingsStillInProgress(preview.in_progress_count));
    }
    Ok(desk)
}

fn handle_preview(period: Period) -> Result<()> {
    if let Some(status) = Closures::new()?.status_for(period)? {
        msg_info!(Message::ClosureStatusOf(period.label(), status.to_string()));
    }

    let desk = prepare(period)?;
    let preview = desk.ready()?;
    if preview.details.is_empty() {
        msg_info!(Message::NoHoursForPeriod(period.label()));
        return Ok(());
    }

    msg_print!(Message::PreviewHeader(period.label()), true);
    View::preview(preview)
}

fn handle_close(actor: &Actor, period: Period, notes: Option<String>, yes: bool) -> Result<()> {
    let mut desk = prepare(period)?;
    let preview = desk.ready()?;
    View::preview(preview)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCloseMonth(period.label()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut closures = Closures::new()?;
    let id = desk.close(&actor.name, notes, |snapshot| closures.commit(snapshot))?;
    msg_success!(Message::MonthClosed(period.label(), id));
    Ok(())
}

fn handle_list(year: Option<i32>, status: Option<ClosureStatus>, include_voided: bool) -> Result<()> {
    let filter = ClosureFilter {
        year,
        status,
        include_voided,
    };
    let closures = Closures::new()?.list(&filter)?;
    if closures.is_empty() {
        msg_info!(Message::NoClosuresFound);
        return Ok(());
    }

    msg_print!(Message::ClosuresHeader, true);
    View::closures(&closures)
}

fn handle_show(id: ClosureId) -> Result<()> {
    let closure = Closures::new()?
        .get_with_details(id)?
        .ok_or_else(|| msg_error_anyhow!(Message::ClosureNotFound(id)))?;
    View::closure(&closure)
}

fn handle_reopen(actor: &Actor, id: ClosureId, yes: bool) -> Result<()> {
    actor.require(Permission::ReopenClosure)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReopenClosure(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let closure = Closures::new()?.reopen(id, &actor.name)?;
    msg_success!(Message::ClosureReopened(id, closure.period().map(|p| p.label()).unwrap_or_default()));
    Ok(())
}

fn handle_status(period: Period, set: Option<ManualStatus>) -> Result<()> {
    let mut closures = Closures::new()?;
    let Some(closure) = closures.live_for(period)? else {
        msg_info!(Message::MonthNotClosed(period.label()));
        return Ok(());
    };

    match set {
        None => msg_print!(Message::ClosureStatusOf(period.label(), closure.status.to_string())),
        Some(target) => {
            let updated = closures.set_status(closure.id, target.into())?;
            msg_success!(Message::ClosureStatusChanged(updated.id, updated.status.to_string()));
        }
    }
    Ok(())
}
