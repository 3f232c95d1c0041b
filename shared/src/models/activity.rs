//! Activity Model

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::Employee;

/// Activity entity (club / interest group)
///
/// Identity is the storage-assigned `id`: two values with the same id are
/// equal regardless of `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Activity {
    pub id: i64,
    pub name: String,
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Activity {}

impl Hash for Activity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Create activity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCreate {
    pub name: String,
}

/// Update activity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityUpdate {
    pub name: String,
}

/// Activity with the employees linked to it
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityWithEmployees {
    pub activity: Activity,
    pub employees: Vec<Employee>,
}
