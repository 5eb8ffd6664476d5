//! # Kalu Schema
//!
//! Bidirectional translation between the dashboard's English ("external")
//! schema and the backend's Portuguese ("internal") schema.
//!
//! ```text
//! tables.rs      raw pair tables, as configured
//! map.rs         injectivity-checked FieldMap / ValueMap
//! translator.rs  recursive Value translation in either Direction
//! profiles.rs    one Translator per RecordKind, chosen by API path
//! ```
//!
//! ```rust
//! use kalu_schema::standard_profiles;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), kalu_schema::SchemaError> {
//! let profiles = standard_profiles()?;
//! let body = profiles.general().to_internal(&json!({
//!     "title": "Finish Report",
//!     "priority": "High",
//!     "status": "Pending",
//! }));
//! assert_eq!(body, json!({"titulo": "Finish Report", "prioridade": "Alta", "status": "Pendente"}));
//! # Ok(())
//! # }
//! ```

mod map;
mod profiles;
pub mod tables;
mod translator;

pub use map::{FieldMap, ValueMap};
pub use profiles::{standard_profiles, SchemaProfiles};
pub use translator::{Direction, Translator};

pub use kalu_types::{RecordKind, SchemaError, TableKind};
