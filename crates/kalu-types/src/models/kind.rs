//! Record kinds, derived from API paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity family a record belongs to.
///
/// The backend reuses the column name `tipo` for different external fields
/// (`doc_type` on documents, `type` elsewhere), so field tables are chosen
/// per kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Task,
    Document,
    Memory,
    Activity,
    Calendar,
}

impl RecordKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] =
        [Self::Task, Self::Document, Self::Memory, Self::Activity, Self::Calendar];

    /// Infer the kind from an API path such as `/tasks/12/result` or
    /// `documents/?tipo=HTML`. Returns `None` for paths outside the
    /// record collections (`/token`, `/stats/overview`, `/health`).
    pub fn from_path(path: &str) -> Option<Self> {
        let segment = path
            .trim_start_matches('/')
            .split(['/', '?'])
            .next()
            .unwrap_or_default();
        match segment {
            "tasks" => Some(Self::Task),
            "documents" => Some(Self::Document),
            "memories" => Some(Self::Memory),
            "activities" => Some(Self::Activity),
            "calendar" => Some(Self::Calendar),
            _ => None,
        }
    }

    /// Parse from the lowercase name used on the command line.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "task" => Some(Self::Task),
            "document" => Some(Self::Document),
            "memory" => Some(Self::Memory),
            "activity" => Some(Self::Activity),
            "calendar" => Some(Self::Calendar),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Task => write!(f, "task"),
            Self::Document => write!(f, "document"),
            Self::Memory => write!(f, "memory"),
            Self::Activity => write!(f, "activity"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(RecordKind::from_path("/tasks/"), Some(RecordKind::Task));
        assert_eq!(RecordKind::from_path("/tasks/7/result"), Some(RecordKind::Task));
        assert_eq!(RecordKind::from_path("documents?tipo=HTML"), Some(RecordKind::Document));
        assert_eq!(RecordKind::from_path("/memories/search"), Some(RecordKind::Memory));
        assert_eq!(RecordKind::from_path("/activities/recent"), Some(RecordKind::Activity));
        assert_eq!(RecordKind::from_path("/calendar/3"), Some(RecordKind::Calendar));
        assert_eq!(RecordKind::from_path("/stats/overview"), None);
        assert_eq!(RecordKind::from_path("/"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_name(&kind.to_string()), Some(kind));
        }
    }
}
