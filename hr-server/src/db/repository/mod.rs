//! Repository Module
//!
//! One module of free functions per table family. Every function takes the
//! pool explicitly and issues parameterized SQL; mutations that touch more
//! than one statement run inside a single transaction.

pub mod activity;
pub mod employee;
pub mod task;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
