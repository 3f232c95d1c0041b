//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::dto::EmployeeDto;
use shared::models::Activity;

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, parse_id, parse_id_list, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    /// `[1,2]` or `1,2`
    pub activities: Option<String>,
}

fn validate(dto: &EmployeeDto) -> AppResult<()> {
    validate_required_text(&dto.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&dto.last_name, "lastName", MAX_NAME_LEN)?;
    validate_required_text(&dto.position, "position", MAX_NAME_LEN)?;
    Ok(())
}

/// GET /employee/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

/// GET /employee/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeDto>> {
    let id = parse_id(&id, "id")?;
    let employee = state.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

/// GET /employee/{id}/activities
pub async fn list_activities(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Activity>>> {
    let id = parse_id(&id, "id")?;
    let activities = state.employees.find_activities_for_employee(id).await?;
    Ok(Json(activities))
}

/// POST /employee/?activities=[1,2]
pub async fn create(
    State(state): State<ServerState>,
    Query(params): Query<CreateParams>,
    Json(payload): Json<EmployeeDto>,
) -> AppResult<(StatusCode, Json<EmployeeDto>)> {
    validate(&payload)?;
    let activity_ids = match params.activities.as_deref() {
        Some(raw) => parse_id_list(raw, "activities")?,
        None => Vec::new(),
    };

    let employee = state.employees.create(payload, activity_ids).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employee/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeDto>,
) -> AppResult<Json<EmployeeDto>> {
    let id = parse_id(&id, "id")?;
    validate(&payload)?;
    let employee = state.employees.update(id, payload).await?;
    Ok(Json(employee))
}

/// DELETE /employee/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "id")?;
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT|DELETE /employee/
pub async fn missing_id() -> AppResult<StatusCode> {
    Err(AppError::required("employee id"))
}
