//! HR Server - employees, activities and tasks over HTTP
//!
//! # Layout
//!
//! ```text
//! hr-server/src/
//! ├── core/          # config, state, server
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── services/      # per-entity business logic
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logging, validation
//! └── error.rs       # service-layer error bridge
//! ```
//!
//! Requests flow `api` → `services` → `db::repository` → SQLite. Wire shapes
//! and error codes live in the `shared` crate.

pub mod api;
pub mod core;
pub mod db;
pub mod error;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use error::{BoxError, ServiceError, ServiceResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
