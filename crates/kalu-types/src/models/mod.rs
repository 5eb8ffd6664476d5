//! Dashboard records in the external (English) naming.
//!
//! These structs are what UI-facing code works with. They never carry a
//! Portuguese field name except where the backend has no external alias
//! (for example `completado_em`).

mod activity;
mod auth;
mod calendar;
mod document;
mod enums;
mod kind;
mod memory;
mod stats;
mod task;

pub use activity::{Activity, ActivityFilter, NewActivity};
pub use auth::{ApiInfo, HealthStatus, TokenResponse, User};
pub use calendar::{CalendarEvent, CalendarFilter, NewCalendarEvent};
pub use document::{Document, DocumentFilter, NewDocument};
pub use enums::{Importance, MemoryType, Priority, TaskStatus};
pub use kind::RecordKind;
pub use memory::{Memory, MemoryFilter, NewMemory};
pub use stats::{CompanyStats, OverviewStats};
pub use task::{NewTask, Task, TaskFilter, TaskResult, TaskUpdate};
