//! Typed error definitions for the Kalu adapter.
//!
//! All errors here are:
//!
//! - **Serializable** so the CLI can print them as JSON
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod schema;

pub use config::ConfigError;
pub use schema::{SchemaError, TableKind};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_serialization() {
        let err = SchemaError::NonInjective {
            table: TableKind::Field,
            internal: "tipo".to_string(),
            first: "doc_type".to_string(),
            second: "type".to_string(),
        };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NonInjective"));
        assert!(json.contains("doc_type"));

        let deserialized: SchemaError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::NonInjective {
            table: TableKind::Field,
            internal: "tipo".to_string(),
            first: "doc_type".to_string(),
            second: "type".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("field table"));
        assert!(msg.contains("`doc_type`"));
        assert!(msg.contains("`type`"));
        assert!(msg.contains("`tipo`"));
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ConfigError::from_json_error(&parse);
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
