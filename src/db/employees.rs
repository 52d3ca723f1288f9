use crate::db::db::Db;
use crate::libs::employee::{join_roles, split_roles, Employee, EmployeeId};
use crate::libs::messages::Message;
use crate::libs::role::Role;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, email, roles) VALUES (?1, ?2, ?3)";
const UPDATE_ROLES: &str = "UPDATE employees SET roles = ?2 WHERE id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name, email, roles FROM employees ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, roles FROM employees WHERE id = ?1";
const SELECT_BY_EMAIL: &str = "SELECT id, name, email, roles FROM employees WHERE email = ?1";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

pub struct Employees {
    conn: Connection,
}

fn from_row(row: &Row) -> rusqlite::Result<Employee> {
    let roles: String = row.get(3)?;
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        roles: split_roles(&roles),
    })
}

impl Employees {
    pub fn new() -> Result<Self> {
        Ok(Self::with(Db::new()?))
    }

    pub fn with(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn insert(&mut self, employee: &Employee) -> Result<EmployeeId> {
        self.conn
            .execute(INSERT_EMPLOYEE, params![employee.name, employee.email, join_roles(&employee.roles)])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn set_roles(&mut self, id: EmployeeId, roles: &[Role]) -> Result<()> {
        let affected = self.conn.execute(UPDATE_ROLES, params![id, join_roles(roles)])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EmployeeNotFound(id)));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: EmployeeId) -> Result<()> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EmployeeNotFound(id)));
        }
        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let employees = stmt.query_map([], from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    pub fn get(&mut self, id: EmployeeId) -> Result<Option<Employee>> {
        self.conn.query_row(SELECT_BY_ID, params![id], from_row).optional().map_err(Into::into)
    }

    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Employee>> {
        self.conn
            .query_row(SELECT_BY_EMAIL, params![email], from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn count(&mut self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
