//! # Kalu Types
//!
//! Records, enums, and error definitions for the Kalu dashboard adapter.
//!
//! - **`error`** - Typed errors for schema tables and configuration
//! - **`models`** - Dashboard records (Task, Document, Memory, Activity, CalendarEvent)
//!   in the external (English) naming, plus query filters and auth payloads
//!
//! ## Architecture Role
//!
//! `kalu-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                kalu-types (this crate)
//!                        │
//!                        ▼
//!                   kalu-schema
//!                        │
//!                        ▼
//!                   kalu-client
//!                        │
//!                        ▼
//!                     kalu-cli
//! ```
//!
//! Records only ever see external names. The backend's Portuguese naming lives
//! exclusively in `kalu-schema`'s tables.

pub mod error;
pub mod models;

pub use error::{ConfigError, SchemaError, TableKind};

pub use models::{
    Activity, ActivityFilter, ApiInfo, CalendarEvent, CalendarFilter, CompanyStats, Document,
    DocumentFilter, HealthStatus, Importance, Memory, MemoryFilter, MemoryType, NewActivity,
    NewCalendarEvent, NewDocument, NewMemory, NewTask, OverviewStats, Priority, RecordKind, Task,
    TaskFilter, TaskResult, TaskStatus, TaskUpdate, TokenResponse, User,
};
