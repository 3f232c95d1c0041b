//! Task Service

use shared::dto::TasksDto;
use shared::error::AppError;
use shared::mapper;
use shared::models::{Employee, Task, TaskRow};
use sqlx::SqlitePool;

use crate::db::repository::{employee, task};
use crate::error::{RepoResultExt, ServiceResult};

#[derive(Clone)]
pub struct TaskService {
    pool: SqlitePool,
}

impl TaskService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a task owned by `employee_id`, which must exist
    pub async fn create(&self, dto: TasksDto, employee_id: i64) -> ServiceResult<TasksDto> {
        let owner = self.require_employee(employee_id).await?;
        let row = task::create(&self.pool, &mapper::task_create(dto), employee_id)
            .await
            .or_not_found(|_| AppError::employee_not_found(employee_id))?;
        tracing::info!(task_id = row.id, employee_id, "Task created");
        Ok(Task::hydrate(row, owner).into())
    }

    /// Update title and status; the task keeps its owner
    pub async fn update(&self, id: i64, dto: TasksDto) -> ServiceResult<TasksDto> {
        let row = task::update(&self.pool, id, &mapper::task_update(dto))
            .await
            .or_not_found(|_| AppError::task_not_found(id))?;
        tracing::info!(task_id = id, "Task updated");
        Ok(self.hydrate(row).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        task::delete(&self.pool, id)
            .await
            .or_not_found(|_| AppError::task_not_found(id))?;
        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<TasksDto> {
        let row = task::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::task_not_found(id))?;
        Ok(self.hydrate(row).await?.into())
    }

    /// Tasks of an existing employee; the list may be empty
    pub async fn get_tasks_for_employee(&self, employee_id: i64) -> ServiceResult<Vec<TasksDto>> {
        let owner = self.require_employee(employee_id).await?;
        let rows = task::find_by_employee(&self.pool, employee_id).await?;
        Ok(rows
            .into_iter()
            .map(|row| Task::hydrate(row, owner.clone()).into())
            .collect())
    }

    async fn require_employee(&self, id: i64) -> ServiceResult<Employee> {
        employee::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(id).into())
    }

    async fn hydrate(&self, row: TaskRow) -> ServiceResult<Task> {
        let owner_id = row.employee_id;
        let owner = employee::find_by_id(&self.pool, owner_id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(owner_id))?;
        Ok(Task::hydrate(row, owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_employee, pool};
    use crate::error::ServiceError;
    use shared::error::ErrorCode;

    fn dto(title: &str, status: &str) -> TasksDto {
        TasksDto {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            title: title.into(),
            status: status.into(),
        }
    }

    fn code_of(err: ServiceError) -> ErrorCode {
        match err {
            ServiceError::App(e) => e.code,
            ServiceError::Db(e) => panic!("unexpected storage error: {e}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let pool = pool().await;
        let service = TaskService::new(pool.clone());
        let ivan = insert_employee(&pool, "Ivan", "Petrov").await;

        let created = service.create(dto("Report", "Pending"), ivan).await.unwrap();
        let fetched = service.get_by_id(created.id.unwrap()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.first_name, "Ivan");
        assert_eq!(fetched.last_name, "Petrov");
    }

    #[tokio::test]
    async fn test_create_for_missing_employee_is_not_found() {
        let service = TaskService::new(pool().await);
        let err = service.create(dto("Report", "Pending"), 99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeNotFound);
    }

    #[tokio::test]
    async fn test_missing_task_is_not_found() {
        let service = TaskService::new(pool().await);

        let err = service.get_by_id(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::TaskNotFound);

        let err = service.update(99, dto("x", "y")).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::TaskNotFound);

        let err = service.delete(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn test_update_keeps_owner_and_accepts_any_status() {
        let pool = pool().await;
        let service = TaskService::new(pool.clone());
        let ivan = insert_employee(&pool, "Ivan", "Petrov").await;
        let created = service.create(dto("Report", "Pending"), ivan).await.unwrap();

        let mut change = dto("Report v2", "waiting on legal");
        change.first_name = "Someone".into();
        let updated = service.update(created.id.unwrap(), change).await.unwrap();

        assert_eq!(updated.title, "Report v2");
        assert_eq!(updated.status, "waiting on legal");
        assert_eq!(updated.first_name, "Ivan");
    }

    #[tokio::test]
    async fn test_tasks_for_employee() {
        let pool = pool().await;
        let service = TaskService::new(pool.clone());
        let ivan = insert_employee(&pool, "Ivan", "Petrov").await;

        assert!(service.get_tasks_for_employee(ivan).await.unwrap().is_empty());

        service.create(dto("Report", "Pending"), ivan).await.unwrap();
        let tasks = service.get_tasks_for_employee(ivan).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Report");

        let err = service.get_tasks_for_employee(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeNotFound);
    }

    #[tokio::test]
    async fn test_deleting_owner_removes_tasks() {
        let pool = pool().await;
        let service = TaskService::new(pool.clone());
        let ivan = insert_employee(&pool, "Ivan", "Petrov").await;
        let created = service.create(dto("Report", "Pending"), ivan).await.unwrap();

        crate::db::repository::employee::delete(&pool, ivan).await.unwrap();
        let err = service.get_by_id(created.id.unwrap()).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::TaskNotFound);
    }
}
