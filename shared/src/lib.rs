//! Shared types for the HR server
//!
//! Domain models, wire DTOs, the mappers between them, and the unified
//! error/response types used by every HTTP handler.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod models;

// Re-exports
pub use dto::{ActivityDto, EmployeeDto, TasksDto};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
