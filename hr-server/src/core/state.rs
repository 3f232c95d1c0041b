use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{ActivityService, EmployeeService, TaskService};

/// Server state handed to every handler
///
/// Cloning is cheap: the pool is reference counted and the services only
/// hold a clone of it.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | configuration (immutable) |
/// | db | SQLite pool |
/// | employees / activities / tasks | entity services |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub employees: EmployeeService,
    pub activities: ActivityService,
    pub tasks: TaskService,
}

impl ServerState {
    /// Open the configured database and wire the services
    pub async fn initialize(config: &Config) -> Result<Self, shared::AppError> {
        let db = DbService::new(config).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    pub fn with_db(config: Config, db: DbService) -> Self {
        let pool: &SqlitePool = &db.pool;
        Self {
            employees: EmployeeService::new(pool.clone()),
            activities: ActivityService::new(pool.clone()),
            tasks: TaskService::new(pool.clone()),
            config,
            db,
        }
    }
}
