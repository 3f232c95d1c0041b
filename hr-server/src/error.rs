//! Unified service-layer error type
//!
//! `ServiceError` sits between repository errors (`RepoError`, `sqlx::Error`)
//! and the API-layer error (`AppError`), so services can use `?` on both and
//! handlers can turn the result into a response with one more `?`.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::db::repository::{RepoError, RepoResult};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error with two variants.
///
/// - `Db`: storage failure (logged, surfaced as a generic 500)
/// - `App`: client-facing error that already carries its `ErrorCode`
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => {
                ServiceError::App(AppError::with_message(ErrorCode::NotFound, msg))
            }
            RepoError::Database(msg) => ServiceError::Db(msg.into()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Turn a repository `NotFound` into the entity-specific `AppError` the
/// caller knows about. Storage errors pass through unchanged.
pub trait RepoResultExt<T> {
    fn or_not_found(self, not_found: impl FnOnce(String) -> AppError) -> ServiceResult<T>;
}

impl<T> RepoResultExt<T> for RepoResult<T> {
    fn or_not_found(self, not_found: impl FnOnce(String) -> AppError) -> ServiceResult<T> {
        self.map_err(|e| match e {
            RepoError::NotFound(msg) => ServiceError::App(not_found(msg)),
            other => other.into(),
        })
    }
}
