use crate::libs::role::Role;
use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl Employee {
    pub fn new(name: &str, email: &str, roles: Vec<Role>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Serializes roles into the comma separated form stored in the database.
pub fn join_roles(roles: &[Role]) -> String {
    roles.iter().map(|role| role.as_str()).collect::<Vec<_>>().join(",")
}

/// Parses a comma separated role list, skipping unknown entries.
pub fn split_roles(value: &str) -> Vec<Role> {
    value.split(',').filter(|s| !s.trim().is_empty()).filter_map(|s| s.parse().ok()).collect()
}
