//! Task Model

use serde::{Deserialize, Serialize};

use super::Employee;

/// Task row as stored: the owner is only a foreign key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    /// Free-text label, no transition rules
    pub status: String,
    pub employee_id: i64,
}

/// Hydrated task: always carries its owning employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub employee: Employee,
}

impl Task {
    /// Attach the owning employee to a stored row
    pub fn hydrate(row: TaskRow, employee: Employee) -> Self {
        debug_assert_eq!(row.employee_id, employee.id);
        Self {
            id: row.id,
            title: row.title,
            status: row.status,
            employee,
        }
    }
}

/// Create task payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub status: String,
}

/// Update task payload (the owner is never reassigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub status: String,
}
