//! Persistence of monthly closures and their per-employee details.
//!
//! Frozen totals are written once, by [`Closures::commit`], and never updated
//! afterwards. Later operations only touch status, audit stamps and notes.

use crate::db::db::Db;
use crate::libs::closure::{
    summarize, ClosureDetail, ClosureError, ClosureFilter, ClosureId, ClosureSnapshot, ClosureStatus, ClosureSummary, ClosureWithDetails,
    MonthlyClosure,
};
use crate::libs::overtime::EmployeeStatus;
use crate::libs::period::Period;
use crate::msg_debug;
use anyhow::Result;
use chrono::Utc;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior};
use std::str::FromStr;

const CLOSURE_COLUMNS: &str = "SELECT id, month, year, status, total_hours, total_exceeded_hours, total_employees, employees_exceeded,
    allowed_monthly_hours, notes, closed_at, closed_by, reopened_at, reopened_by, voided_at, created_at, updated_at
    FROM monthly_closures";
const DETAIL_COLUMNS: &str = "SELECT id, closure_id, employee_id, employee_name, employee_email, total_hours, allowed_hours, exceeded_hours,
    total_clockings, status, notes, created_at, updated_at
    FROM monthly_closure_details";
const SELECT_LIVE_FOR_PERIOD: &str = "SELECT id, status FROM monthly_closures WHERE year = ?1 AND month = ?2 AND voided_at IS NULL";
const VOID_CLOSURE: &str = "UPDATE monthly_closures SET voided_at = ?2, updated_at = ?2 WHERE id = ?1";
const INSERT_CLOSURE: &str = "INSERT INTO monthly_closures (month, year, status, total_hours, total_exceeded_hours, total_employees,
    employees_exceeded, allowed_monthly_hours, notes, closed_at, closed_by, created_at, updated_at)
    VALUES (?1, ?2, 'closed', ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?9, ?9)";
const INSERT_DETAIL: &str = "INSERT INTO monthly_closure_details (closure_id, employee_id, employee_name, employee_email, total_hours,
    allowed_hours, exceeded_hours, total_clockings, status, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)";
const REOPEN_CLOSURE: &str = "UPDATE monthly_closures SET status = 'open', closed_at = NULL, closed_by = NULL,
    reopened_at = ?2, reopened_by = ?3, updated_at = ?2 WHERE id = ?1";
const UPDATE_STATUS: &str = "UPDATE monthly_closures SET status = ?2, updated_at = ?3 WHERE id = ?1";
const UPDATE_NOTES: &str = "UPDATE monthly_closures SET notes = ?2, updated_at = ?3 WHERE id = ?1";
const UPDATE_DETAIL_NOTES: &str = "UPDATE monthly_closure_details SET notes = ?2, updated_at = ?3 WHERE id = ?1";

fn parse_text<T: FromStr<Err = String>>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    text.parse().map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

fn closure_from_row(row: &Row) -> rusqlite::Result<MonthlyClosure> {
    Ok(MonthlyClosure {
        id: row.get(0)?,
        month: row.get(1)?,
        year: row.get(2)?,
        status: parse_text::<ClosureStatus>(row, 3)?,
        total_hours: row.get(4)?,
        total_exceeded_hours: row.get(5)?,
        total_employees: row.get(6)?,
        employees_exceeded: row.get(7)?,
        allowed_monthly_hours: row.get(8)?,
        notes: row.get(9)?,
        closed_at: row.get(10)?,
        closed_by: row.get(11)?,
        reopened_at: row.get(12)?,
        reopened_by: row.get(13)?,
        voided_at: row.get(14)?,
        created_at: row.get(15)?,
        updated_at: row.get(16)?,
    })
}

fn detail_from_row(row: &Row) -> rusqlite::Result<ClosureDetail> {
    Ok(ClosureDetail {
        id: row.get(0)?,
        closure_id: row.get(1)?,
        employee_id: row.get(2)?,
        employee_name: row.get(3)?,
        employee_email: row.get(4)?,
        total_hours: row.get(5)?,
        allowed_hours: row.get(6)?,
        exceeded_hours: row.get(7)?,
        total_clockings: row.get(8)?,
        status: parse_text::<EmployeeStatus>(row, 9)?,
        notes: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

pub struct Closures {
    conn: Connection,
}

impl Closures {
    pub fn new() -> Result<Self> {
        Ok(Self::with(Db::new()?))
    }

    pub fn with(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// Closures ordered newest period first.
    pub fn list(&mut self, filter: &ClosureFilter) -> Result<Vec<MonthlyClosure>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(year) = filter.year {
            conditions.push("year = ?");
            values.push(Value::Integer(year as i64));
        }
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            values.push(Value::Text(status.as_str().to_string()));
        }
        if !filter.include_voided {
            conditions.push("voided_at IS NULL");
        }

        let mut sql = CLOSURE_COLUMNS.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY year DESC, month DESC, id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let closures = stmt
            .query_map(params_from_iter(values), closure_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(closures)
    }

    pub fn get(&mut self, id: ClosureId) -> Result<Option<MonthlyClosure>> {
        let sql = format!("{} WHERE id = ?1", CLOSURE_COLUMNS);
        self.conn.query_row(&sql, params![id], closure_from_row).optional().map_err(Into::into)
    }

    pub fn get_with_details(&mut self, id: ClosureId) -> Result<Option<ClosureWithDetails>> {
        let Some(closure) = self.get(id)? else {
            return Ok(None);
        };

        let sql = format!("{} WHERE closure_id = ?1 ORDER BY exceeded_hours DESC, employee_name ASC", DETAIL_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let details = stmt.query_map(params![id], detail_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ClosureWithDetails { closure, details }))
    }

    /// The non-voided closure for `period`, if any.
    pub fn live_for(&mut self, period: Period) -> Result<Option<MonthlyClosure>> {
        let sql = format!("{} WHERE year = ?1 AND month = ?2 AND voided_at IS NULL", CLOSURE_COLUMNS);
        self.conn
            .query_row(&sql, params![period.year, period.month], closure_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Status of the live closure for `period`, if any.
    pub fn status_for(&mut self, period: Period) -> Result<Option<ClosureStatus>> {
        Ok(self.live_for(period)?.map(|closure| closure.status))
    }

    /// Persists the snapshot as a closed month in one transaction.
    ///
    /// A live `closed` closure blocks the commit. A reopened (`open`) or
    /// `reviewing` one is voided and superseded by the new row.
    pub fn commit(&mut self, snapshot: &ClosureSnapshot) -> Result<ClosureId> {
        let preview = &snapshot.preview;
        let period = preview.period;
        let now = Utc::now();

        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let live: Option<(ClosureId, String)> = tx
            .query_row(SELECT_LIVE_FOR_PERIOD, params![period.year, period.month], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?;

        if let Some((live_id, status)) = live {
            let status = status.parse::<ClosureStatus>().map_err(anyhow::Error::msg)?;
            if status == ClosureStatus::Closed {
                return Err(ClosureError::AlreadyClosed { period, status }.into());
            }
            msg_debug!(format!("Voiding {} closure {} for {}", status, live_id, period));
            tx.execute(VOID_CLOSURE, params![live_id, now])?;
        }

        tx.execute(
            INSERT_CLOSURE,
            params![
                period.month,
                period.year,
                preview.totals.total_hours,
                preview.totals.total_exceeded_hours,
                preview.totals.total_employees,
                preview.totals.employees_exceeded,
                preview.allowed_monthly_hours,
                snapshot.notes,
                now,
                snapshot.closed_by
            ],
        )?;
        let closure_id = tx.last_insert_rowid();

        for detail in &preview.details {
            let total = &detail.total;
            tx.execute(
                INSERT_DETAIL,
                params![
                    closure_id,
                    total.employee_id,
                    total.employee_name,
                    detail.employee_email,
                    total.total_hours,
                    total.allowed_hours,
                    total.exceeded_hours,
                    total.total_clockings,
                    total.status.as_str(),
                    now
                ],
            )?;
        }

        tx.commit()?;
        Ok(closure_id)
    }

    /// Reopens a closed month. Frozen totals and details stay for audit.
    pub fn reopen(&mut self, id: ClosureId, reopened_by: &str) -> Result<MonthlyClosure> {
        let closure = self.live(id)?;
        if closure.status != ClosureStatus::Closed {
            return Err(ClosureError::InvalidTransition {
                from: closure.status,
                to: ClosureStatus::Open,
            }
            .into());
        }

        self.conn.execute(REOPEN_CLOSURE, params![id, Utc::now(), reopened_by])?;
        self.get(id)?.ok_or_else(|| ClosureError::NotFound(id).into())
    }

    /// Moves a live closure between `open` and `reviewing`.
    pub fn set_status(&mut self, id: ClosureId, status: ClosureStatus) -> Result<MonthlyClosure> {
        let closure = self.live(id)?;
        if !closure.status.can_set(status) {
            return Err(ClosureError::InvalidTransition {
                from: closure.status,
                to: status,
            }
            .into());
        }

        self.conn.execute(UPDATE_STATUS, params![id, status.as_str(), Utc::now()])?;
        self.get(id)?.ok_or_else(|| ClosureError::NotFound(id).into())
    }

    pub fn update_notes(&mut self, id: ClosureId, notes: Option<&str>) -> Result<()> {
        let affected = self.conn.execute(UPDATE_NOTES, params![id, notes, Utc::now()])?;
        if affected == 0 {
            return Err(ClosureError::NotFound(id).into());
        }
        Ok(())
    }

    pub fn update_detail_notes(&mut self, detail_id: i64, notes: Option<&str>) -> Result<()> {
        let affected = self.conn.execute(UPDATE_DETAIL_NOTES, params![detail_id, notes, Utc::now()])?;
        if affected == 0 {
            return Err(ClosureError::DetailNotFound(detail_id).into());
        }
        Ok(())
    }

    pub fn summary(&mut self) -> Result<ClosureSummary> {
        let closures = self.list(&ClosureFilter::default())?;
        Ok(summarize(&closures))
    }

    fn live(&mut self, id: ClosureId) -> Result<MonthlyClosure> {
        match self.get(id)? {
            Some(closure) if !closure.is_voided() => Ok(closure),
            _ => Err(ClosureError::NotFound(id).into()),
        }
    }
}
