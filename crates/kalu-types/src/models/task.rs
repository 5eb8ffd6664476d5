//! Kanban task records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{Priority, TaskStatus};

/// A task as returned by the backend, after translation to external names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub company: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: String,
    pub assigned_to: String,
    #[serde(default)]
    pub result: Option<String>,
    /// One of `json`, `text`, `file`, `image`
    #[serde(default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub result_url: Option<String>,
    /// The backend column has no external alias.
    #[serde(default, rename = "completado_em")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Body for `POST /tasks/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub company: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
}

impl NewTask {
    /// Create a task with backend defaults (Medium priority, Pending).
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self { title: title.into(), company: company.into(), ..Default::default() }
    }
}

/// Partial body for `PUT /tasks/{id}`. Unset fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
}

/// Body for `POST /tasks/{id}/result`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResult {
    pub result: String,
    pub result_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
}

/// Query filters for `GET /tasks/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_external_record() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Finish Report",
            "description": null,
            "company": "IMPULSO IA",
            "priority": "High",
            "status": "In Progress",
            "tags": "t3,namibia",
            "deadline": null,
            "created_at": "2026-02-01T09:30:00.123456",
            "updated_at": "2026-02-01T09:30:00",
            "created_by": "Oscar",
            "assigned_to": "Kalu",
            "result": null,
            "result_type": null,
            "result_url": null,
            "completado_em": null
        });

        let task: Task = serde_json::from_value(json).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("Write T3 report", "IMPULSO IA");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "Medium");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let json = serde_json::to_value(TaskUpdate::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
