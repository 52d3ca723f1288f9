//! Clocking record repository.
//!
//! [`ClockingStore`] is the seam between the hours engine and wherever the
//! records live. The SQLite implementation in `db::clockings` is used by the
//! application; [`MemoryStore`] backs demo seeding and tests.
//!
//! The free functions at the bottom implement the clocking lifecycle on top
//! of any store: start, end and delete, with the ownership rules applied.

use crate::libs::clocking::{ClockingError, ClockingId, ClockingRecord};
use crate::libs::employee::EmployeeId;
use crate::libs::period::Period;
use crate::libs::role::Actor;
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Narrows a `list` call. An empty filter returns every record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockingFilter {
    pub employee_id: Option<EmployeeId>,
    pub period: Option<Period>,
    pub open_only: bool,
}

impl ClockingFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn employee(mut self, employee_id: EmployeeId) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn open(mut self) -> Self {
        self.open_only = true;
        self
    }

    pub fn matches(&self, record: &ClockingRecord) -> bool {
        self.employee_id.map_or(true, |id| record.employee_id == id)
            && self.period.map_or(true, |period| period.contains(record.start_time))
            && (!self.open_only || record.is_open())
    }
}

pub trait ClockingStore {
    /// Records matching `filter`, newest start first.
    fn list(&mut self, filter: &ClockingFilter) -> Result<Vec<ClockingRecord>>;

    fn get(&mut self, id: ClockingId) -> Result<Option<ClockingRecord>>;

    /// Inserts a record and returns its assigned id.
    fn create(&mut self, record: &ClockingRecord) -> Result<ClockingId>;

    /// Replaces the stored record with the same id.
    fn update_one(&mut self, record: &ClockingRecord) -> Result<()>;

    fn delete_one(&mut self, id: ClockingId) -> Result<()>;
}

/// Volatile store keeping records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ClockingRecord>,
    next_id: ClockingId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }

    pub fn with_records(records: Vec<ClockingRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ClockingRecord] {
        &self.records
    }

    fn insert(&mut self, mut record: ClockingRecord) -> ClockingId {
        let id = match record.id {
            Some(id) => id,
            None => self.next_id.max(1),
        };
        self.next_id = self.next_id.max(id + 1);
        record.id = Some(id);
        self.records.push(record);
        id
    }
}

impl ClockingStore for MemoryStore {
    fn list(&mut self, filter: &ClockingFilter) -> Result<Vec<ClockingRecord>> {
        let mut records: Vec<ClockingRecord> = self.records.iter().filter(|r| filter.matches(r)).cloned().collect();
        records.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    fn get(&mut self, id: ClockingId) -> Result<Option<ClockingRecord>> {
        Ok(self.records.iter().find(|r| r.id == Some(id)).cloned())
    }

    fn create(&mut self, record: &ClockingRecord) -> Result<ClockingId> {
        let mut record = record.clone();
        record.id = None;
        Ok(self.insert(record))
    }

    fn update_one(&mut self, record: &ClockingRecord) -> Result<()> {
        let id = record.id.unwrap_or_default();
        let slot = self.records.iter_mut().find(|r| r.id == Some(id)).ok_or(ClockingError::NotFound(id))?;
        *slot = record.clone();
        Ok(())
    }

    fn delete_one(&mut self, id: ClockingId) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != Some(id));
        if self.records.len() == before {
            return Err(ClockingError::NotFound(id).into());
        }
        Ok(())
    }
}

/// Opens a clocking for `employee_id` at `start`, on behalf of `actor`.
///
/// An employee can have at most one clocking in progress.
pub fn start_clocking<S: ClockingStore + ?Sized>(
    store: &mut S,
    actor: &Actor,
    employee_id: EmployeeId,
    employee_name: &str,
    start: DateTime<Utc>,
    description: Option<String>,
) -> Result<ClockingRecord> {
    actor.require_owner_or(employee_id)?;

    let open = store.list(&ClockingFilter::all().employee(employee_id).open())?;
    if !open.is_empty() {
        return Err(ClockingError::AlreadyInProgress(employee_id).into());
    }

    let mut record = ClockingRecord::new(employee_id, employee_name, start, description);
    record.id = Some(store.create(&record)?);
    Ok(record)
}

/// Completes the clocking `id` at `end`.
pub fn end_clocking<S: ClockingStore + ?Sized>(store: &mut S, actor: &Actor, id: ClockingId, end: DateTime<Utc>) -> Result<ClockingRecord> {
    let mut record = store.get(id)?.ok_or(ClockingError::NotFound(id))?;
    actor.require_owner_or(record.employee_id)?;
    record.complete(end)?;
    store.update_one(&record)?;
    Ok(record)
}

pub fn delete_clocking<S: ClockingStore + ?Sized>(store: &mut S, actor: &Actor, id: ClockingId) -> Result<ClockingRecord> {
    let record = store.get(id)?.ok_or(ClockingError::NotFound(id))?;
    actor.require_owner_or(record.employee_id)?;
    store.delete_one(id)?;
    Ok(record)
}
