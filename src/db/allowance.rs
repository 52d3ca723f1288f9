use crate::db::db::Db;
use crate::libs::allowance::{effective_hours, validate_hours, MonthlyAllowance};
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

const UPSERT_ALLOWANCE: &str = "INSERT INTO monthly_hours_config (id, monthly_hours, updated_at, updated_by)
    VALUES (1, ?1, ?2, ?3)
    ON CONFLICT(id) DO UPDATE SET monthly_hours = excluded.monthly_hours,
        updated_at = excluded.updated_at, updated_by = excluded.updated_by";
const SELECT_ALLOWANCE: &str = "SELECT monthly_hours, updated_at, updated_by FROM monthly_hours_config WHERE id = 1";

/// Storage of the global monthly hours allowance.
pub struct Allowances {
    conn: Connection,
}

impl Allowances {
    pub fn new() -> Result<Self> {
        Ok(Self::with(Db::new()?))
    }

    pub fn with(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// The stored allowance, if one was ever configured.
    pub fn get(&mut self) -> Result<Option<MonthlyAllowance>> {
        self.conn
            .query_row(SELECT_ALLOWANCE, [], |row| {
                Ok(MonthlyAllowance {
                    hours: row.get(0)?,
                    updated_at: row.get(1)?,
                    updated_by: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// The stored allowance or the fallback.
    pub fn current(&mut self) -> Result<MonthlyAllowance> {
        Ok(self.get()?.unwrap_or_else(MonthlyAllowance::fallback))
    }

    pub fn hours(&mut self) -> Result<f64> {
        Ok(effective_hours(self.get()?.as_ref()))
    }

    /// Replaces the allowance. Out of range values are rejected before writing.
    pub fn set(&mut self, hours: f64, updated_by: &str) -> Result<MonthlyAllowance> {
        validate_hours(hours)?;
        let now = Utc::now();
        self.conn.execute(UPSERT_ALLOWANCE, params![hours, now, updated_by])?;
        Ok(MonthlyAllowance {
            hours,
            updated_at: Some(now),
            updated_by: Some(updated_by.to_string()),
        })
    }
}
