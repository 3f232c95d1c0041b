//! Activity Service

use shared::dto::ActivityDto;
use shared::error::AppError;
use shared::mapper;
use shared::models::{Activity, ActivityWithEmployees};
use sqlx::SqlitePool;

use crate::db::repository::{activity, employee};
use crate::error::{RepoResultExt, ServiceResult};

#[derive(Clone)]
pub struct ActivityService {
    pool: SqlitePool,
}

impl ActivityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an activity. Members listed on the payload are ignored.
    pub async fn create(&self, dto: ActivityDto) -> ServiceResult<ActivityDto> {
        let created = activity::create(&self.pool, &mapper::activity_create(dto)).await?;
        tracing::info!(activity_id = created.id, name = %created.name, "Activity created");
        Ok(self.with_employees(created).await?.into())
    }

    pub async fn update(&self, id: i64, dto: ActivityDto) -> ServiceResult<ActivityDto> {
        let updated = activity::update(&self.pool, id, &mapper::activity_update(dto))
            .await
            .or_not_found(|_| AppError::activity_not_found(id))?;
        tracing::info!(activity_id = id, "Activity updated");
        Ok(self.with_employees(updated).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        activity::delete(&self.pool, id)
            .await
            .or_not_found(|_| AppError::activity_not_found(id))?;
        tracing::info!(activity_id = id, "Activity deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<ActivityDto> {
        let found = activity::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::activity_not_found(id))?;
        Ok(self.with_employees(found).await?.into())
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<ActivityDto>> {
        let all = activity::find_all_with_employees(&self.pool).await?;
        Ok(all.into_iter().map(ActivityDto::from).collect())
    }

    async fn with_employees(&self, activity: Activity) -> ServiceResult<ActivityWithEmployees> {
        let employees = employee::find_by_activity(&self.pool, activity.id).await?;
        Ok(ActivityWithEmployees {
            activity,
            employees,
        })
    }
}
