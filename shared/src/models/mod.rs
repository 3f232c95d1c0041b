//! Data models
//!
//! Persisted records and the composed views services assemble from them.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod activity;
pub mod employee;
pub mod task;

// Re-exports
pub use activity::*;
pub use employee::*;
pub use task::*;
