//! SQLite persistence.
//!
//! Every table has a small store struct owning its connection, in the same
//! shape: `new()` opens the configured database and `with(db)` wraps an
//! already opened one (tests open databases at explicit paths).
//!
//! ```rust,ignore
//! use chronos::db::{allowance::Allowances, db::Db};
//!
//! let mut allowances = Allowances::with(Db::open(&path)?);
//! allowances.set(165.0, "Laura RRHH")?;
//! ```

/// Connection setup and database location.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

pub mod allowance;

/// Clocking records; implements the `ClockingStore` repository.
pub mod clockings;

pub mod closures;

pub mod employees;
