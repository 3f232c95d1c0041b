//! Employee Model

use serde::{Deserialize, Serialize};

use super::{Activity, Task};

/// Employee entity (persisted row)
///
/// Serialized in camelCase because it is nested as-is inside activity views.
/// Inbound members may omit `id`; it defaults to 0 and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

/// Update employee payload (full replacement of the mutable columns)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

/// Employee together with its activities and tasks
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub activities: Vec<Activity>,
    pub tasks: Vec<Task>,
}

impl EmployeeDetail {
    /// Detail view of a freshly created employee: no tasks yet
    pub fn new(employee: Employee, activities: Vec<Activity>) -> Self {
        Self {
            employee,
            activities,
            tasks: Vec::new(),
        }
    }
}
