//! Wording of every [`Message`].
//!
//! Parameters are interpolated here so call sites only pick a variant:
//!
//! ```rust,ignore
//! Message::MonthClosed(period, id) => format!("{} closed (closure #{})", period, id)
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigCurrent(json) => format!("Current configuration:\n{}", json),
            Message::ConfigModuleUser => "User (acting employee)".to_string(),
            Message::ConfigModuleServer => "Server (remote clockings)".to_string(),
            Message::ConfigModuleDatabase => "Database location".to_string(),
            Message::NoActingEmployee => "No acting employee. Pass --as <EMPLOYEE_ID> or run `chronos init`".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeesHeader => "Employees:".to_string(),
            Message::NoEmployeesFound => "No employees found".to_string(),
            Message::EmployeeNotFound(id) => format!("Employee {} not found", id),
            Message::EmployeeEmailTaken(email) => format!("An employee with email {} already exists", email),
            Message::EmployeeCreated(id, name) => format!("Employee {} created with id {}", name, id),
            Message::EmployeeDeleted(id) => format!("Employee {} deleted", id),
            Message::EmployeeRolesUpdated(id, roles) => format!("Employee {} now has roles: {}", id, roles),
            Message::CannotDeleteSelf => "You cannot delete yourself".to_string(),
            Message::ConfirmDeleteEmployee(id) => format!("Delete employee {}?", id),

            // === CLOCKING MESSAGES ===
            Message::ClockingStarted(id, name) => format!("Clocking {} started for {}", id, name),
            Message::ClockingEnded(id, duration) => format!("Clocking {} ended after {}", id, duration),
            Message::ClockingDeleted(id) => format!("Clocking {} deleted", id),
            Message::ClockingsHeader(count) => format!("Clockings ({}):", count),
            Message::NoClockingsFound => "No clockings found".to_string(),
            Message::NoClockingInProgress => "No clocking in progress".to_string(),
            Message::ConfirmDeleteClocking(id) => format!("Delete clocking {}?", id),

            // === ALLOWANCE MESSAGES ===
            Message::AllowanceCurrent(hours) => format!("Monthly allowance: {} h", hours),
            Message::AllowanceIsDefault => "Not configured yet, using the default".to_string(),
            Message::AllowanceUpdated(at, by) => format!("Last changed {} by {}", at, by),
            Message::AllowanceSaved(hours) => format!("Monthly allowance set to {} h", hours),

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("Monthly report {}:", period),
            Message::DashboardHeader(name, period) => format!("Dashboard for {} ({}):", name, period),
            Message::HistoryHeader(name) => format!("History of {}:", name),
            Message::NoHoursForPeriod(period) => format!("No hours recorded in {}", period),

            // === CLOSURE MESSAGES ===
            Message::PreviewHeader(period) => format!("Closure preview {}:", period),
            Message::ClockingsStillInProgress(count) => {
                format!("{} clocking(s) still in progress; they count as 0 hours until ended", count)
            }
            Message::ConfirmCloseMonth(period) => format!("Close {}? Totals will be frozen", period),
            Message::MonthClosed(period, id) => format!("{} closed (closure #{})", period, id),
            Message::MonthNotClosed(period) => format!("{} has no closure", period),
            Message::ClosuresHeader => "Monthly closures:".to_string(),
            Message::NoClosuresFound => "No closures found".to_string(),
            Message::ClosureNotFound(id) => format!("Closure {} not found", id),
            Message::ConfirmReopenClosure(id) => format!("Reopen closure {}?", id),
            Message::ClosureReopened(id, period) => format!("Closure {} for {} reopened", id, period),
            Message::ClosureStatusOf(period, status) => format!("{} is {}", period, status),
            Message::ClosureStatusChanged(id, status) => format!("Closure {} is now {}", id, status),
            Message::ClosureNotesUpdated(id) => format!("Notes of closure {} updated", id),
            Message::ClosureDetailNotesUpdated(id) => format!("Notes of closure line {} updated", id),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === SEED AND SYNC MESSAGES ===
            Message::SeedRefused => "The database already has employees. Use --force to seed anyway".to_string(),
            Message::SeedCompleted(employees, clockings) => {
                format!("Demo data loaded: {} employees, {} clockings", employees, clockings)
            }
            Message::ServerNotConfigured => "Server is not configured. Run `chronos init`".to_string(),
            Message::SyncCompleted(created, updated) => format!("Sync completed: {} new, {} updated", created, updated),
            Message::RemoteRequestFailed(status) => format!("Remote request failed: {}", status),
            Message::RemoteInvalidUserId(id, user_id) => format!("Remote clocking {} has a non-numeric user id '{}'", id, user_id),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptEmployeeId => "Your employee id".to_string(),
            Message::PromptServerApiUrl => "Server API URL".to_string(),
            Message::PromptServerAuthToken => "Server auth token".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => format!("  v{}: {} (applied: {})", version, name, applied_at),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };

        write!(f, "{}", text)
    }
}
