//! Conversions between persisted models and transfer objects
//!
//! Everything here is pure. Input conversions drop the client-supplied `id`
//! since identifiers are only ever assigned by storage.

use crate::dto::{ActivityDto, EmployeeDto, TasksDto};
use crate::models::{
    ActivityCreate, ActivityUpdate, ActivityWithEmployees, EmployeeCreate, EmployeeDetail,
    EmployeeUpdate, Task, TaskCreate, TaskUpdate,
};

// ── Outbound ────────────────────────────────────────────────────────

impl From<Task> for TasksDto {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id),
            first_name: task.employee.first_name,
            last_name: task.employee.last_name,
            title: task.title,
            status: task.status,
        }
    }
}

impl From<EmployeeDetail> for EmployeeDto {
    fn from(detail: EmployeeDetail) -> Self {
        let EmployeeDetail {
            employee,
            activities,
            tasks,
        } = detail;

        Self {
            id: Some(employee.id),
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            activity: activities.into_iter().map(|a| a.id).collect(),
            tasks: tasks.into_iter().map(TasksDto::from).collect(),
        }
    }
}

impl From<ActivityWithEmployees> for ActivityDto {
    fn from(view: ActivityWithEmployees) -> Self {
        Self {
            id: Some(view.activity.id),
            name: view.activity.name,
            employees: view.employees,
        }
    }
}

// ── Inbound ─────────────────────────────────────────────────────────

pub fn employee_create(dto: EmployeeDto) -> EmployeeCreate {
    EmployeeCreate {
        first_name: dto.first_name,
        last_name: dto.last_name,
        position: dto.position,
    }
}

pub fn employee_update(dto: EmployeeDto) -> EmployeeUpdate {
    EmployeeUpdate {
        first_name: dto.first_name,
        last_name: dto.last_name,
        position: dto.position,
    }
}

/// Members listed on the DTO are ignored: membership is managed from the
/// employee side.
pub fn activity_create(dto: ActivityDto) -> ActivityCreate {
    ActivityCreate { name: dto.name }
}

pub fn activity_update(dto: ActivityDto) -> ActivityUpdate {
    ActivityUpdate { name: dto.name }
}

/// The owner's name on the DTO is display-only and never written back.
pub fn task_create(dto: TasksDto) -> TaskCreate {
    TaskCreate {
        title: dto.title,
        status: dto.status,
    }
}

pub fn task_update(dto: TasksDto) -> TaskUpdate {
    TaskUpdate {
        title: dto.title,
        status: dto.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Employee};

    fn ivan() -> Employee {
        Employee {
            id: 1,
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            position: "Developer".into(),
        }
    }

    #[test]
    fn test_task_flattens_owner_name() {
        let task = Task {
            id: 10,
            title: "Report".into(),
            status: "Pending".into(),
            employee: ivan(),
        };

        let dto = TasksDto::from(task);
        assert_eq!(dto.id, Some(10));
        assert_eq!(dto.first_name, "Ivan");
        assert_eq!(dto.last_name, "Petrov");
        assert_eq!(dto.title, "Report");
        assert_eq!(dto.status, "Pending");
    }

    #[test]
    fn test_employee_detail_keeps_only_activity_ids() {
        let detail = EmployeeDetail {
            employee: ivan(),
            activities: vec![
                Activity {
                    id: 7,
                    name: "Swimming".into(),
                },
                Activity {
                    id: 9,
                    name: "Chess".into(),
                },
            ],
            tasks: vec![],
        };

        let dto = EmployeeDto::from(detail);
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.activity, vec![7, 9]);
        assert!(dto.tasks.is_empty());
    }

    #[test]
    fn test_activity_without_members_maps_to_empty_list() {
        let view = ActivityWithEmployees {
            activity: Activity {
                id: 7,
                name: "Swimming".into(),
            },
            employees: vec![],
        };

        let dto = ActivityDto::from(view);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name, "Swimming");
        assert!(dto.employees.is_empty());
    }

    #[test]
    fn test_inbound_ignores_client_id() {
        let dto = TasksDto {
            id: Some(42),
            first_name: "Someone".into(),
            last_name: "Else".into(),
            title: "Report".into(),
            status: "Done".into(),
        };

        let update = task_update(dto);
        assert_eq!(update.title, "Report");
        assert_eq!(update.status, "Done");
    }
}
