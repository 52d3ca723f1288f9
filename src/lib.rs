//! # Chronos - employee clockings and monthly closures
//!
//! A command-line utility and library for recording employee work time,
//! reporting monthly hours and overtime against a configurable allowance,
//! and freezing monthly payroll closures.
//!
//! ## Features
//!
//! - **Clockings**: Start/stop work-time records per employee
//! - **Monthly Aggregation**: One engine for reports, dashboard KPIs, history and closures
//! - **Overtime Policy**: Global monthly allowance with exceeded-hours classification
//! - **Monthly Closures**: Preview, close, review, reopen and annotate a payroll period
//! - **Role Simulation**: Permission checks for HR, administrators and employees
//! - **Data Export**: CSV, JSON and Excel output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
