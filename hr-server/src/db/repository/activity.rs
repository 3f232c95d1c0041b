//! Activity Repository

use std::collections::HashMap;

use super::{RepoError, RepoResult};
use shared::models::{Activity, ActivityCreate, ActivityUpdate, ActivityWithEmployees, Employee};
use sqlx::{SqliteExecutor, SqlitePool};

async fn select_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Activity>> {
    let activity = sqlx::query_as::<_, Activity>("SELECT id, name FROM activity WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(activity)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Activity>> {
    select_by_id(pool, id).await
}

pub async fn create(pool: &SqlitePool, data: &ActivityCreate) -> RepoResult<Activity> {
    let id: i64 = sqlx::query_scalar("INSERT INTO activity (name) VALUES (?) RETURNING id")
        .bind(&data.name)
        .fetch_one(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create activity".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &ActivityUpdate) -> RepoResult<Activity> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE activity SET name = ? WHERE id = ?")
        .bind(&data.name)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Activity {id} not found")));
    }

    let activity = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Activity {id} not found")))?;
    tx.commit().await?;
    Ok(activity)
}

/// Delete an activity; membership rows go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM activity WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Activity {id} not found")));
    }
    Ok(())
}

/// One row of the activity/employee outer join. Employee columns are NULL
/// for an activity without members.
#[derive(sqlx::FromRow)]
struct ActivityMemberRow {
    activity_id: i64,
    activity_name: String,
    employee_id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    position: Option<String>,
}

impl ActivityMemberRow {
    fn split(self) -> (Activity, Option<Employee>) {
        let activity = Activity {
            id: self.activity_id,
            name: self.activity_name,
        };
        let employee = self.employee_id.map(|id| Employee {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
        });
        (activity, employee)
    }
}

/// Every activity with its members, in one query.
///
/// Rows are grouped by activity identity while keeping query order, so the
/// result is ordered by activity id and each member list by employee id.
/// Activities without members are kept with an empty list.
pub async fn find_all_with_employees(pool: &SqlitePool) -> RepoResult<Vec<ActivityWithEmployees>> {
    let rows = sqlx::query_as::<_, ActivityMemberRow>(
        "SELECT a.id AS activity_id, a.name AS activity_name, \
                e.id AS employee_id, e.emp_firstname AS first_name, \
                e.emp_lastname AS last_name, e.position AS position \
         FROM activity a \
         LEFT JOIN employee_activity ea ON ea.activity_id = a.id \
         LEFT JOIN employee e ON e.id = ea.employee_id \
         ORDER BY a.id, e.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(group_by_activity(rows))
}

fn group_by_activity(rows: Vec<ActivityMemberRow>) -> Vec<ActivityWithEmployees> {
    let mut grouped: Vec<ActivityWithEmployees> = Vec::new();
    let mut index: HashMap<Activity, usize> = HashMap::new();

    for row in rows {
        let (activity, employee) = row.split();
        let slot = match index.get(&activity) {
            Some(&slot) => slot,
            None => {
                index.insert(activity.clone(), grouped.len());
                grouped.push(ActivityWithEmployees {
                    activity,
                    employees: Vec::new(),
                });
                grouped.len() - 1
            }
        };
        if let Some(employee) = employee {
            grouped[slot].employees.push(employee);
        }
    }

    grouped
}
