//! Simulated roles and the authorization boundary.
//!
//! There is no authentication protocol: the acting identity comes from the
//! configuration (or the `--as` flag) and its roles decide which operations
//! the command layer lets through. The hours engine itself never checks
//! permissions.

use crate::libs::employee::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Highest privilege; the only role allowed to reopen a closed month.
    SystemAdmin,
    /// Human resources.
    Hr,
    Employee,
    /// May manage other employees' clockings.
    ClockingAdmin,
    /// Operates a shared clocking terminal on behalf of employees.
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Clock,
    ManageAllClockings,
    ViewAllReports,
    ViewHistory,
    ConfigureAllowance,
    ManageClosures,
    ReopenClosure,
    ManageEmployees,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("{actor} is not allowed to {action}")]
    Denied { actor: String, action: String },
}

impl Role {
    pub const ALL: [Role; 5] = [Role::SystemAdmin, Role::Hr, Role::Employee, Role::ClockingAdmin, Role::Operator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system-admin",
            Role::Hr => "hr",
            Role::Employee => "employee",
            Role::ClockingAdmin => "clocking-admin",
            Role::Operator => "operator",
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        use Permission::*;
        match self {
            Role::SystemAdmin => true,
            Role::Hr => !matches!(permission, ReopenClosure | ManageEmployees),
            Role::Employee => matches!(permission, Clock),
            Role::ClockingAdmin | Role::Operator => matches!(permission, Clock | ManageAllClockings),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

impl Permission {
    fn describe(&self) -> &'static str {
        match self {
            Permission::Clock => "record clockings",
            Permission::ManageAllClockings => "manage other employees' clockings",
            Permission::ViewAllReports => "view reports for all employees",
            Permission::ViewHistory => "view employee history",
            Permission::ConfigureAllowance => "change the monthly hours allowance",
            Permission::ManageClosures => "manage monthly closures",
            Permission::ReopenClosure => "reopen a closed month",
            Permission::ManageEmployees => "manage employees",
        }
    }
}

/// The identity an operation is performed as.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub employee_id: EmployeeId,
    pub name: String,
    pub roles: Vec<Role>,
}

impl Actor {
    pub fn new(employee_id: EmployeeId, name: &str, roles: Vec<Role>) -> Self {
        Self {
            employee_id,
            name: name.to_string(),
            roles,
        }
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.roles.iter().any(|role| role.grants(permission))
    }

    pub fn require(&self, permission: Permission) -> Result<(), AccessError> {
        if self.can(permission) {
            Ok(())
        } else {
            Err(AccessError::Denied {
                actor: self.name.clone(),
                action: permission.describe().to_string(),
            })
        }
    }

    /// Owners may always act on their own records; others need `ManageAllClockings`.
    pub fn require_owner_or(&self, owner: EmployeeId) -> Result<(), AccessError> {
        if owner == self.employee_id {
            self.require(Permission::Clock)
        } else {
            self.require(Permission::ManageAllClockings)
        }
    }

    /// The employee filter a report may use. Callers who cannot see everyone's
    /// data are pinned to their own records whatever they asked for.
    pub fn report_scope(&self, requested: Option<EmployeeId>) -> Option<EmployeeId> {
        if self.can(Permission::ViewAllReports) {
            requested
        } else {
            Some(self.employee_id)
        }
    }
}

impl From<&Employee> for Actor {
    fn from(employee: &Employee) -> Self {
        Self::new(employee.id.unwrap_or_default(), &employee.name, employee.roles.clone())
    }
}
