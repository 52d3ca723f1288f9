//! Core library modules for the chronos application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Hours Engine**: Duration calculation, monthly aggregation, overtime policy
//! - **Closures**: Preview generation and the closure state machine
//! - **Presentation**: Reports, dashboard KPIs, console tables, data export
//! - **Access**: Simulated roles and permission checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos::libs::{aggregate, overtime, period::Period};
//!
//! let period = Period::new(3, 2025)?;
//! let totals = aggregate::aggregate(&records, period, None);
//! let rows = overtime::apply_allowance(&totals, 160.0);
//! let rollup = overtime::rollup(&rows);
//! ```

pub mod aggregate;
pub mod allowance;
pub mod clocking;
pub mod closure;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod overtime;
pub mod period;
pub mod report;
pub mod role;
pub mod seed;
pub mod stats;
pub mod store;
pub mod view;
