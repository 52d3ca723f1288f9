//! Versioned schema migrations.
//!
//! Every schema change is a numbered migration. On open, pending migrations
//! run in one transaction and are recorded in the `migrations` table, so a
//! database is always either fully at a version or untouched.
//!
//! ```rust,ignore
//! use chronos::db::migrations::{get_db_version, init_with_migrations};
//!
//! let mut conn = rusqlite::Connection::open("chronos.db")?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 4);
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_employees_and_clockings", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    roles TEXT NOT NULL DEFAULT 'employee',
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS clockings (
                    id INTEGER PRIMARY KEY,
                    employee_id INTEGER NOT NULL,
                    employee_name TEXT NOT NULL,
                    start_time TIMESTAMP NOT NULL,
                    end_time TIMESTAMP,
                    description TEXT
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_clockings_start ON clockings(start_time)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_clockings_employee ON clockings(employee_id)", [])?;
            Ok(())
        });

        // Singleton row, id is always 1
        self.add_migration(2, "add_monthly_hours_config", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS monthly_hours_config (
                    id INTEGER PRIMARY KEY CHECK (id = 1),
                    monthly_hours REAL NOT NULL CHECK (monthly_hours >= 1 AND monthly_hours <= 744),
                    updated_at TIMESTAMP NOT NULL,
                    updated_by TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        });

        self.add_migration(3, "add_monthly_closures", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS monthly_closures (
                    id INTEGER PRIMARY KEY,
                    month INTEGER NOT NULL CHECK (month >= 1 AND month <= 12),
                    year INTEGER NOT NULL,
                    status TEXT NOT NULL CHECK (status IN ('open', 'reviewing', 'closed')),
                    total_hours REAL NOT NULL,
                    total_exceeded_hours REAL NOT NULL,
                    total_employees INTEGER NOT NULL,
                    employees_exceeded INTEGER NOT NULL,
                    allowed_monthly_hours REAL NOT NULL,
                    notes TEXT,
                    closed_at TIMESTAMP,
                    closed_by TEXT,
                    reopened_at TIMESTAMP,
                    reopened_by TEXT,
                    voided_at TIMESTAMP,
                    created_at TIMESTAMP NOT NULL,
                    updated_at TIMESTAMP NOT NULL
                )",
                [],
            )?;

            // At most one live closure per month
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_monthly_closures_period
                    ON monthly_closures(year, month) WHERE voided_at IS NULL",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS monthly_closure_details (
                    id INTEGER PRIMARY KEY,
                    closure_id INTEGER NOT NULL,
                    employee_id INTEGER NOT NULL,
                    employee_name TEXT NOT NULL,
                    employee_email TEXT,
                    total_hours REAL NOT NULL,
                    allowed_hours REAL NOT NULL,
                    exceeded_hours REAL NOT NULL,
                    total_clockings INTEGER NOT NULL,
                    status TEXT NOT NULL CHECK (status IN ('normal', 'exceeded')),
                    notes TEXT,
                    created_at TIMESTAMP NOT NULL,
                    updated_at TIMESTAMP NOT NULL,
                    FOREIGN KEY (closure_id) REFERENCES monthly_closures(id) ON DELETE CASCADE
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_closure_details_closure ON monthly_closure_details(closure_id)", [])?;
            Ok(())
        });

        // Records imported by `chronos sync` keep the backend id
        self.add_migration(4, "add_clockings_remote_id", |tx| {
            tx.execute("ALTER TABLE clockings ADD COLUMN remote_id TEXT", [])?;
            tx.execute("CREATE UNIQUE INDEX IF NOT EXISTS idx_clockings_remote_id ON clockings(remote_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Highest registered version.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every migration newer than the database's version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }
        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Applied migrations as (version, name, applied_at), oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Forgets migrations above `target_version`. Schema changes are not undone.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;
        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
