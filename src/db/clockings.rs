use crate::db::db::Db;
use crate::libs::clocking::{ClockingError, ClockingId, ClockingRecord};
use crate::libs::store::{ClockingFilter, ClockingStore};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};

const INSERT_CLOCKING: &str = "INSERT INTO clockings (employee_id, employee_name, start_time, end_time, description) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_CLOCKING: &str = "UPDATE clockings SET employee_id = ?2, employee_name = ?3, start_time = ?4, end_time = ?5, description = ?6 WHERE id = ?1";
const DELETE_CLOCKING: &str = "DELETE FROM clockings WHERE id = ?1";
const SELECT_COLUMNS: &str = "SELECT id, employee_id, employee_name, start_time, end_time, description FROM clockings";
const UPSERT_REMOTE: &str = "INSERT INTO clockings (employee_id, employee_name, start_time, end_time, description, remote_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(remote_id) DO UPDATE SET employee_id = excluded.employee_id, employee_name = excluded.employee_name,
        start_time = excluded.start_time, end_time = excluded.end_time, description = excluded.description";
const SELECT_BY_REMOTE_ID: &str = "SELECT id FROM clockings WHERE remote_id = ?1";

/// SQLite backed [`ClockingStore`].
pub struct Clockings {
    conn: Connection,
}

fn from_row(row: &Row) -> rusqlite::Result<ClockingRecord> {
    Ok(ClockingRecord {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        employee_name: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        description: row.get(5)?,
    })
}

impl Clockings {
    pub fn new() -> Result<Self> {
        Ok(Self::with(Db::new()?))
    }

    pub fn with(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// Inserts or refreshes a record imported from the remote backend.
    /// Returns `true` when the record was new.
    pub fn upsert_remote(&mut self, remote_id: &str, record: &ClockingRecord) -> Result<bool> {
        upsert_on(&self.conn, remote_id, record)
    }

    /// Upserts a whole remote batch in one transaction, so a failing row
    /// leaves nothing behind. Returns `(created, updated)`.
    pub fn upsert_remote_all(&mut self, batch: &[(String, ClockingRecord)]) -> Result<(usize, usize)> {
        let tx = self.conn.transaction()?;
        let (mut created, mut updated) = (0, 0);
        for (remote_id, record) in batch {
            if upsert_on(&tx, remote_id, record)? {
                created += 1;
            } else {
                updated += 1;
            }
        }
        tx.commit()?;
        Ok((created, updated))
    }
}

fn upsert_on(conn: &Connection, remote_id: &str, record: &ClockingRecord) -> Result<bool> {
    let existed = conn
        .query_row(SELECT_BY_REMOTE_ID, params![remote_id], |row| row.get::<_, i64>(0))
        .optional()?
        .is_some();

    conn.execute(
        UPSERT_REMOTE,
        params![
            record.employee_id,
            record.employee_name,
            record.start_time,
            record.end_time,
            record.description,
            remote_id
        ],
    )?;
    Ok(!existed)
}

impl ClockingStore for Clockings {
    fn list(&mut self, filter: &ClockingFilter) -> Result<Vec<ClockingRecord>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(employee_id) = filter.employee_id {
            conditions.push("employee_id = ?");
            values.push(Box::new(employee_id));
        }
        if let Some(period) = filter.period {
            conditions.push("start_time >= ? AND start_time < ?");
            values.push(Box::new(period.start()));
            values.push(Box::new(period.end()));
        }
        if filter.open_only {
            conditions.push("end_time IS NULL");
        }

        let mut sql = SELECT_COLUMNS.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY start_time DESC, id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map(params_from_iter(values.iter()), from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        // Text bounds narrow the scan; the parsed timestamps decide
        Ok(records.into_iter().filter(|r| filter.matches(r)).collect())
    }

    fn get(&mut self, id: ClockingId) -> Result<Option<ClockingRecord>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        self.conn.query_row(&sql, params![id], from_row).optional().map_err(Into::into)
    }

    fn create(&mut self, record: &ClockingRecord) -> Result<ClockingId> {
        self.conn.execute(
            INSERT_CLOCKING,
            params![record.employee_id, record.employee_name, record.start_time, record.end_time, record.description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_one(&mut self, record: &ClockingRecord) -> Result<()> {
        let id = record.id.unwrap_or_default();
        let affected = self.conn.execute(
            UPDATE_CLOCKING,
            params![id, record.employee_id, record.employee_name, record.start_time, record.end_time, record.description],
        )?;
        if affected == 0 {
            return Err(ClockingError::NotFound(id).into());
        }
        Ok(())
    }

    fn delete_one(&mut self, id: ClockingId) -> Result<()> {
        let affected = self.conn.execute(DELETE_CLOCKING, params![id])?;
        if affected == 0 {
            return Err(ClockingError::NotFound(id).into());
        }
        Ok(())
    }
}
