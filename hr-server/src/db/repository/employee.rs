//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Activity, Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

async fn select_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, emp_firstname AS first_name, emp_lastname AS last_name, position FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(employee)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, emp_firstname AS first_name, emp_lastname AS last_name, position FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    select_by_id(pool, id).await
}

/// Insert an employee and link it to `activity_ids` atomically.
///
/// Every activity must exist; the first unknown id aborts the transaction and
/// nothing is written.
pub async fn create(
    pool: &SqlitePool,
    data: &EmployeeCreate,
    activity_ids: &[i64],
) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (emp_firstname, emp_lastname, position) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.position)
    .fetch_one(&mut *tx)
    .await?;

    for &activity_id in activity_ids {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM activity WHERE id = ?")
            .bind(activity_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(RepoError::NotFound(format!(
                "Activity {activity_id} not found"
            )));
        }

        sqlx::query("INSERT INTO employee_activity (employee_id, activity_id) VALUES (?, ?)")
            .bind(id)
            .bind(activity_id)
            .execute(&mut *tx)
            .await?;
    }

    let employee = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))?;
    tx.commit().await?;
    Ok(employee)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &EmployeeUpdate) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE employee SET emp_firstname = ?, emp_lastname = ?, position = ? WHERE id = ?",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.position)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }

    let employee = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;
    tx.commit().await?;
    Ok(employee)
}

/// Delete an employee; links and tasks go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}

/// Activities linked to an employee, by activity id
pub async fn find_activities(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Activity>> {
    let activities = sqlx::query_as::<_, Activity>(
        "SELECT a.id, a.name FROM activity a \
         JOIN employee_activity ea ON ea.activity_id = a.id \
         WHERE ea.employee_id = ? ORDER BY a.id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(activities)
}

/// Employees linked to an activity, by employee id
pub async fn find_by_activity(pool: &SqlitePool, activity_id: i64) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT e.id, e.emp_firstname AS first_name, e.emp_lastname AS last_name, e.position \
         FROM employee e \
         JOIN employee_activity ea ON ea.employee_id = e.id \
         WHERE ea.activity_id = ? ORDER BY e.id",
    )
    .bind(activity_id)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_activity, pool};

    fn ivan() -> EmployeeCreate {
        EmployeeCreate {
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            position: "Developer".into(),
        }
    }

    async fn employee_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let pool = pool().await;

        let created = create(&pool, &ivan(), &[]).await.unwrap();
        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.first_name, "Ivan");
        assert_eq!(found.last_name, "Petrov");
        assert_eq!(found.position, "Developer");
    }

    #[tokio::test]
    async fn test_create_links_activities() {
        let pool = pool().await;
        let chess = insert_activity(&pool, "Chess").await;
        let swimming = insert_activity(&pool, "Swimming").await;

        let employee = create(&pool, &ivan(), &[swimming, chess]).await.unwrap();
        let ids: Vec<i64> = find_activities(&pool, employee.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();

        let mut expected = vec![chess, swimming];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_create_with_unknown_activity_writes_nothing() {
        let pool = pool().await;
        let chess = insert_activity(&pool, "Chess").await;

        let err = create(&pool, &ivan(), &[chess, 999]).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        assert_eq!(employee_count(&pool).await, 0);
        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee_activity")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = pool().await;
        let data = EmployeeUpdate {
            first_name: "Nobody".into(),
            last_name: "Here".into(),
            position: "None".into(),
        };

        let err = update(&pool, 99, &data).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let pool = pool().await;
        let created = create(&pool, &ivan(), &[]).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            &EmployeeUpdate {
                first_name: "Ivan".into(),
                last_name: "Petrov".into(),
                position: "Lead".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.position, "Lead");
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let pool = pool().await;
        let created = create(&pool, &ivan(), &[]).await.unwrap();

        delete(&pool, created.id).await.unwrap();
        let err = delete(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_cascades_links() {
        let pool = pool().await;
        let chess = insert_activity(&pool, "Chess").await;
        let created = create(&pool, &ivan(), &[chess]).await.unwrap();

        delete(&pool, created.id).await.unwrap();
        assert!(find_by_activity(&pool, chess).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_activity_may_be_empty() {
        let pool = pool().await;
        let chess = insert_activity(&pool, "Chess").await;
        assert!(find_by_activity(&pool, chess).await.unwrap().is_empty());

        let created = create(&pool, &ivan(), &[chess]).await.unwrap();
        assert_eq!(find_by_activity(&pool, chess).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let pool = pool().await;
        let a = create(&pool, &ivan(), &[]).await.unwrap();
        let b = create(
            &pool,
            &EmployeeCreate {
                first_name: "Anna".into(),
                last_name: "Sidorova".into(),
                position: "Tester".into(),
            },
            &[],
        )
        .await
        .unwrap();

        assert_eq!(find_all(&pool).await.unwrap(), vec![a, b]);
    }
}
