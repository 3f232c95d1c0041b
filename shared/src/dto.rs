//! Wire-level transfer objects
//!
//! These are the JSON shapes handlers accept and return. They differ from the
//! persisted models on purpose: an employee carries activity ids rather than
//! activities, and tasks carry the owner's name rather than a nested employee,
//! so nothing on the wire is cyclic.
//!
//! `id` is assigned by the server. It is ignored on input and always present
//! on responses.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Employee view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// Linked activity ids
    #[serde(default)]
    pub activity: Vec<i64>,
    #[serde(default)]
    pub tasks: Vec<TasksDto>,
}

/// Task view with the owner's name flattened in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub title: String,
    pub status: String,
}

/// Activity view with its members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<Employee>,
}
