//! Task Repository

use super::{RepoError, RepoResult};
use shared::models::{TaskCreate, TaskRow, TaskUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

async fn select_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<TaskRow>> {
    let task = sqlx::query_as::<_, TaskRow>(
        "SELECT id, title, status, employee_id FROM tasks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(task)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TaskRow>> {
    select_by_id(pool, id).await
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<TaskRow>> {
    let tasks = sqlx::query_as::<_, TaskRow>(
        "SELECT id, title, status, employee_id FROM tasks WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(tasks)
}

pub async fn create(pool: &SqlitePool, data: &TaskCreate, employee_id: i64) -> RepoResult<TaskRow> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO tasks (title, status, employee_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.title)
    .bind(&data.status)
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepoError::NotFound(format!("Employee {employee_id} not found"))
        }
        other => other.into(),
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create task".into()))
}

/// Rewrite title and status. The owning employee is never changed here.
pub async fn update(pool: &SqlitePool, id: i64, data: &TaskUpdate) -> RepoResult<TaskRow> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE tasks SET title = ?, status = ? WHERE id = ?")
        .bind(&data.title)
        .bind(&data.status)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Task {id} not found")));
    }

    let task = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Task {id} not found")))?;
    tx.commit().await?;
    Ok(task)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Task {id} not found")));
    }
    Ok(())
}
