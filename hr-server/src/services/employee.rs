//! Employee Service

use shared::dto::EmployeeDto;
use shared::error::{AppError, ErrorCode};
use shared::mapper;
use shared::models::{Activity, Employee, EmployeeDetail, Task};
use sqlx::SqlitePool;

use crate::db::repository::{activity, employee, task};
use crate::error::{RepoResultExt, ServiceResult};

#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an employee linked to `activity_ids`.
    ///
    /// Repeated ids are collapsed, keeping the first occurrence. Unknown ids
    /// fail the whole call and leave nothing behind.
    pub async fn create(
        &self,
        dto: EmployeeDto,
        activity_ids: Vec<i64>,
    ) -> ServiceResult<EmployeeDto> {
        let activity_ids = dedup_keep_order(activity_ids);
        let data = mapper::employee_create(dto);
        let created = employee::create(&self.pool, &data, &activity_ids)
            .await
            .or_not_found(|msg| AppError::with_message(ErrorCode::ActivityNotFound, msg))?;
        let activities = employee::find_activities(&self.pool, created.id).await?;

        tracing::info!(
            employee_id = created.id,
            activities = activities.len(),
            "Employee created"
        );
        Ok(EmployeeDetail::new(created, activities).into())
    }

    pub async fn update(&self, id: i64, dto: EmployeeDto) -> ServiceResult<EmployeeDto> {
        let updated = employee::update(&self.pool, id, &mapper::employee_update(dto))
            .await
            .or_not_found(|_| AppError::employee_not_found(id))?;
        tracing::info!(employee_id = id, "Employee updated");
        Ok(self.detail(updated).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        employee::delete(&self.pool, id)
            .await
            .or_not_found(|_| AppError::employee_not_found(id))?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<EmployeeDto> {
        let found = self.require(id).await?;
        Ok(self.detail(found).await?.into())
    }

    pub async fn list(&self) -> ServiceResult<Vec<EmployeeDto>> {
        let employees = employee::find_all(&self.pool).await?;
        let mut result = Vec::with_capacity(employees.len());
        for e in employees {
            result.push(self.detail(e).await?.into());
        }
        Ok(result)
    }

    /// Activities of an employee. An employee without any is reported as
    /// not found rather than as an empty list.
    pub async fn find_activities_for_employee(&self, id: i64) -> ServiceResult<Vec<Activity>> {
        self.require(id).await?;

        let activities = employee::find_activities(&self.pool, id).await?;
        if activities.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::EmployeeHasNoActivities,
                format!("Employee {id} has no activities"),
            )
            .with_detail("id", id)
            .into());
        }
        Ok(activities)
    }

    /// Members of an activity; the list may be empty
    pub async fn find_employees_for_activity(
        &self,
        activity_id: i64,
    ) -> ServiceResult<Vec<EmployeeDto>> {
        if activity::find_by_id(&self.pool, activity_id).await?.is_none() {
            return Err(AppError::activity_not_found(activity_id).into());
        }

        let employees = employee::find_by_activity(&self.pool, activity_id).await?;
        let mut result = Vec::with_capacity(employees.len());
        for e in employees {
            result.push(self.detail(e).await?.into());
        }
        Ok(result)
    }

    async fn require(&self, id: i64) -> ServiceResult<Employee> {
        employee::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(id).into())
    }

    /// Compose an employee with its activities and tasks (both may be empty)
    async fn detail(&self, employee: Employee) -> ServiceResult<EmployeeDetail> {
        let activities = employee::find_activities(&self.pool, employee.id).await?;
        let tasks = task::find_by_employee(&self.pool, employee.id)
            .await?
            .into_iter()
            .map(|row| Task::hydrate(row, employee.clone()))
            .collect();

        Ok(EmployeeDetail {
            employee,
            activities,
            tasks,
        })
    }
}

fn dedup_keep_order(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_activity, pool};
    use crate::error::ServiceError;
    use std::collections::HashSet;

    fn ivan_dto() -> EmployeeDto {
        EmployeeDto {
            id: None,
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            position: "Developer".into(),
            activity: vec![],
            tasks: vec![],
        }
    }

    fn code_of(err: ServiceError) -> ErrorCode {
        match err {
            ServiceError::App(e) => e.code,
            ServiceError::Db(e) => panic!("unexpected storage error: {e}"),
        }
    }

    #[test]
    fn test_dedup_keep_order() {
        assert_eq!(dedup_keep_order(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(dedup_keep_order(vec![]).is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let pool = pool().await;
        let service = EmployeeService::new(pool.clone());
        let swimming = insert_activity(&pool, "Swimming").await;

        let created = service.create(ivan_dto(), vec![swimming]).await.unwrap();
        let id = created.id.unwrap();
        let fetched = service.get_by_id(id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.activity, vec![swimming]);
        assert!(fetched.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_ignores_repeated_activity_ids() {
        let pool = pool().await;
        let service = EmployeeService::new(pool.clone());
        let chess = insert_activity(&pool, "Chess").await;

        let created = service.create(ivan_dto(), vec![chess, chess]).await.unwrap();
        assert_eq!(created.activity, vec![chess]);
    }

    #[tokio::test]
    async fn test_activities_for_employee_returns_all_linked() {
        let pool = pool().await;
        let service = EmployeeService::new(pool.clone());
        let first = insert_activity(&pool, "Chess").await;
        let second = insert_activity(&pool, "Swimming").await;

        let created = service.create(ivan_dto(), vec![first, second]).await.unwrap();
        let activities = service
            .find_activities_for_employee(created.id.unwrap())
            .await
            .unwrap();

        let ids: HashSet<i64> = activities.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, HashSet::from([first, second]));
    }

    #[tokio::test]
    async fn test_activities_for_employee_without_links_is_not_found() {
        let pool = pool().await;
        let service = EmployeeService::new(pool);

        let created = service.create(ivan_dto(), vec![]).await.unwrap();
        let err = service
            .find_activities_for_employee(created.id.unwrap())
            .await
            .unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeHasNoActivities);
    }

    #[tokio::test]
    async fn test_employees_for_activity_may_be_empty() {
        let pool = pool().await;
        let service = EmployeeService::new(pool.clone());
        let chess = insert_activity(&pool, "Chess").await;

        assert!(service.find_employees_for_activity(chess).await.unwrap().is_empty());

        let err = service.find_employees_for_activity(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::ActivityNotFound);
    }

    #[tokio::test]
    async fn test_missing_employee_is_not_found() {
        let service = EmployeeService::new(pool().await);

        let err = service.get_by_id(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeNotFound);

        let err = service.update(99, ivan_dto()).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeNotFound);

        let err = service.delete(99).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::EmployeeNotFound);
    }

    #[tokio::test]
    async fn test_unknown_activity_aborts_creation() {
        let service = EmployeeService::new(pool().await);

        let err = service.create(ivan_dto(), vec![42]).await.unwrap_err();
        assert_eq!(code_of(err), ErrorCode::ActivityNotFound);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_links_and_ignores_client_collections() {
        let pool = pool().await;
        let service = EmployeeService::new(pool.clone());
        let chess = insert_activity(&pool, "Chess").await;
        let created = service.create(ivan_dto(), vec![chess]).await.unwrap();
        let id = created.id.unwrap();

        let mut changed = ivan_dto();
        changed.position = "Lead".into();
        changed.activity = vec![1234];
        let updated = service.update(id, changed).await.unwrap();

        assert_eq!(updated.position, "Lead");
        assert_eq!(updated.activity, vec![chess]);
    }
}
