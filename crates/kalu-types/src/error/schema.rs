//! Schema table and translation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which translation table an error refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Field-name table (external key -> internal key)
    Field,
    /// Enum-value table (external value -> internal value)
    Value,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Field => write!(f, "field"),
            Self::Value => write!(f, "value"),
        }
    }
}

/// Errors raised while building translation tables or translating records.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SchemaError {
    /// Two external entries map to the same internal entry, so the reverse
    /// direction cannot tell them apart.
    #[error("{table} table is not injective: `{first}` and `{second}` both map to `{internal}`")]
    NonInjective {
        /// Table the collision was found in
        table: TableKind,
        /// Internal name both entries point at
        internal: String,
        /// External entry registered first
        first: String,
        /// External entry that collided with it
        second: String,
    },

    /// The same external entry is listed twice.
    #[error("{table} table lists `{external}` more than once")]
    DuplicateKey {
        /// Table the duplicate was found in
        table: TableKind,
        /// Repeated external entry
        external: String,
    },

    /// Input could not be represented as a JSON record.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Description of why the input is not a record
        message: String,
    },
}

impl SchemaError {
    /// Create a malformed-input error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::MalformedInput { message: e.to_string() }
    }
}
