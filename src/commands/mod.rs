//! Command-line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` entry point. Permission checks happen here, at the command
//! boundary; the library underneath never asks who is calling.

pub mod allowance;
pub mod clock;
pub mod closure;
pub mod dashboard;
pub mod employee;
pub mod export;
pub mod history;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod report;
pub mod seed;
pub mod sync;

use crate::db::{allowance::Allowances, clockings::Clockings, employees::Employees};
use crate::libs::clocking::ClockingRecord;
use crate::libs::config::Config;
use crate::libs::employee::EmployeeId;
use crate::libs::messages::Message;
use crate::libs::role::Actor;
use crate::libs::store::{ClockingFilter, ClockingStore};
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start, end, list and delete clockings")]
    Clock(clock::ClockArgs),
    #[command(about = "Manage employees and their roles")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Show or change the monthly hours allowance")]
    Allowance(allowance::AllowanceArgs),
    #[command(about = "Monthly hours and overtime report")]
    Report(report::ReportArgs),
    #[command(about = "Key figures for a month")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Clocking history of one employee")]
    History(history::HistoryArgs),
    #[command(about = "Preview, close, review and reopen monthly closures")]
    Closure(closure::ClosureArgs),
    #[command(about = "Export reports, closures or clockings")]
    Export(export::ExportArgs),
    #[command(about = "Load the demo dataset")]
    Seed(seed::SeedArgs),
    #[command(about = "Import clockings from the configured server")]
    Sync,
    #[cfg(debug_assertions)]
    #[command(about = "Database migration status (debug builds)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Act as this employee instead of the configured one.
    #[arg(long = "as", global = true, value_name = "EMPLOYEE_ID")]
    acting_as: Option<EmployeeId>,

    #[command(subcommand)]
    command: Commands,
}

/// Per-invocation state shared by the subcommands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub acting_as: Option<EmployeeId>,
}

impl Context {
    /// Resolves the acting identity from `--as` or the configuration.
    pub fn actor(&self) -> Result<Actor> {
        let employee_id = match self.acting_as {
            Some(id) => id,
            None => Config::read()?.employee_id().ok_or_else(|| msg_error_anyhow!(Message::NoActingEmployee))?,
        };

        let employee = Employees::new()?
            .get(employee_id)?
            .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(employee_id)))?;
        Ok(Actor::from(&employee))
    }
}

/// Records matching `filter` from the local database.
pub(crate) fn load_records(filter: &ClockingFilter) -> Result<Vec<ClockingRecord>> {
    Clockings::new()?.list(filter)
}

pub(crate) fn allowance_hours() -> Result<f64> {
    Allowances::new()?.hours()
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let ctx = Context { acting_as: cli.acting_as };

        let result = match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Clock(args) => clock::cmd(args, &ctx),
            Commands::Employee(args) => employee::cmd(args, &ctx),
            Commands::Allowance(args) => allowance::cmd(args, &ctx),
            Commands::Report(args) => report::cmd(args, &ctx),
            Commands::Dashboard(args) => dashboard::cmd(args, &ctx),
            Commands::History(args) => history::cmd(args, &ctx),
            Commands::Closure(args) => closure::cmd(args, &ctx),
            Commands::Export(args) => export::cmd(args, &ctx),
            Commands::Seed(args) => seed::cmd(args),
            Commands::Sync => sync::cmd(&ctx).await,
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        };

        if let Err(e) = result {
            msg_error!(e);
        }
        Ok(())
    }
}
