//! Activity API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::dto::{ActivityDto, EmployeeDto};

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, parse_id, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /activity/ - every activity with its members
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ActivityDto>>> {
    let activities = state.activities.get_all().await?;
    Ok(Json(activities))
}

/// GET /activity/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ActivityDto>> {
    let id = parse_id(&id, "id")?;
    let activity = state.activities.get_by_id(id).await?;
    Ok(Json(activity))
}

/// GET /activity/{id}/employees
pub async fn list_employees(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<EmployeeDto>>> {
    let id = parse_id(&id, "id")?;
    let employees = state.employees.find_employees_for_activity(id).await?;
    Ok(Json(employees))
}

/// POST /activity/
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ActivityDto>,
) -> AppResult<(StatusCode, Json<ActivityDto>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let activity = state.activities.create(payload).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// PUT /activity/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityDto>,
) -> AppResult<Json<ActivityDto>> {
    let id = parse_id(&id, "id")?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let activity = state.activities.update(id, payload).await?;
    Ok(Json(activity))
}

/// DELETE /activity/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "id")?;
    state.activities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT|DELETE /activity/
pub async fn missing_id() -> AppResult<StatusCode> {
    Err(AppError::required("activity id"))
}
