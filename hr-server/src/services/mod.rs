//! Service layer
//!
//! One stateless service per entity. Each holds a clone of the pool, checks
//! existence where an operation depends on another row, and assembles the
//! composed views that handlers return.

pub mod activity;
pub mod employee;
pub mod task;

pub use activity::ActivityService;
pub use employee::EmployeeService;
pub use task::TaskService;
