//! Task API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::dto::TasksDto;

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_STATUS_LEN, parse_id, validate_required_text, validate_text_len,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pub employee_id: Option<String>,
}

fn validate(dto: &TasksDto) -> AppResult<()> {
    validate_required_text(&dto.title, "title", MAX_NAME_LEN)?;
    validate_text_len(&dto.status, "status", MAX_STATUS_LEN)?;
    Ok(())
}

/// GET /task/{employeeId}
pub async fn list_for_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<TasksDto>>> {
    let employee_id = parse_id(&employee_id, "employeeId")?;
    let tasks = state.tasks.get_tasks_for_employee(employee_id).await?;
    Ok(Json(tasks))
}

/// GET /task/item/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TasksDto>> {
    let id = parse_id(&id, "id")?;
    let task = state.tasks.get_by_id(id).await?;
    Ok(Json(task))
}

/// POST /task/?employeeId=N
pub async fn create(
    State(state): State<ServerState>,
    Query(params): Query<CreateParams>,
    Json(payload): Json<TasksDto>,
) -> AppResult<(StatusCode, Json<TasksDto>)> {
    let employee_id = params
        .employee_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::required("employeeId"))?;
    let employee_id = parse_id(employee_id, "employeeId")?;
    validate(&payload)?;

    let task = state.tasks.create(payload, employee_id).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /task/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TasksDto>,
) -> AppResult<Json<TasksDto>> {
    let id = parse_id(&id, "id")?;
    validate(&payload)?;
    let task = state.tasks.update(id, payload).await?;
    Ok(Json(task))
}

/// DELETE /task/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "id")?;
    state.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /task/
pub async fn missing_employee_id() -> AppResult<StatusCode> {
    Err(AppError::required("employee id"))
}

/// PUT|DELETE /task/
pub async fn missing_id() -> AppResult<StatusCode> {
    Err(AppError::required("task id"))
}
