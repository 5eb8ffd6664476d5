//! Enumerated values carried by dashboard records.
//!
//! Serialized forms are the external spellings; the value table in
//! `kalu-schema` maps them to the backend's Portuguese spellings. The backend
//! stores these columns as free text, so every enum keeps unknown values in
//! an `Other` variant instead of failing the whole record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    #[serde(untagged)]
    Other(String),
}

impl Priority {
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Kanban column a task sits in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
    /// Backend-only status with no external spelling in the value table
    #[serde(rename = "Bloqueado")]
    Blocked,
    #[serde(untagged)]
    Other(String),
}

impl TaskStatus {
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Blocked => write!(f, "Bloqueado"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Importance of a memory note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
    Critical,
    #[serde(untagged)]
    Other(String),
}

/// Kind of a memory note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemoryType {
    Conversation,
    Decision,
    Lesson,
    Fact,
    /// Any label outside the four standard kinds, kept verbatim
    #[serde(untagged)]
    Other(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_blocked_keeps_backend_spelling() {
        let status: TaskStatus = serde_json::from_str("\"Bloqueado\"").unwrap();
        assert_eq!(status, TaskStatus::Blocked);
    }

    #[test]
    fn test_importance_and_memory_type_are_lowercase() {
        assert_eq!(serde_json::to_string(&Importance::Critical).unwrap(), "\"critical\"");
        assert_eq!(serde_json::to_string(&MemoryType::Lesson).unwrap(), "\"lesson\"");
    }

    #[test]
    fn test_unknown_values_are_kept() {
        let kind: MemoryType = serde_json::from_str("\"insight\"").unwrap();
        assert_eq!(kind, MemoryType::Other("insight".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"insight\"");

        let importance: Importance = serde_json::from_str("\"urgente\"").unwrap();
        assert_eq!(importance, Importance::Other("urgente".to_string()));

        let status: TaskStatus = serde_json::from_str("\"Em Revisão\"").unwrap();
        assert!(!status.is_known());
        assert_eq!(status.to_string(), "Em Revisão");

        let priority: Priority = serde_json::from_str("\"Urgente\"").unwrap();
        assert_eq!(priority, Priority::Other("Urgente".to_string()));
    }

    #[test]
    fn test_known_values_do_not_fall_through() {
        let kind: MemoryType = serde_json::from_str("\"fact\"").unwrap();
        assert_eq!(kind, MemoryType::Fact);
        let priority: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert!(priority.is_known());
    }
}
