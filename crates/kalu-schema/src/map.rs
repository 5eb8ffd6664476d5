//! Injective name tables for fields and enum values.

use std::collections::HashMap;

use kalu_types::{SchemaError, TableKind};

/// Forward and reverse lookups over one validated pair list.
#[derive(Debug, Clone, Default)]
struct InjectiveMap {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
    /// Insertion order, for listing
    entries: Vec<(String, String)>,
}

impl InjectiveMap {
    fn build<I, E, N>(table: TableKind, pairs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (E, N)>,
        E: Into<String>,
        N: Into<String>,
    {
        let mut map = Self::default();
        for (external, internal) in pairs {
            let external = external.into();
            let internal = internal.into();

            if map.forward.contains_key(&external) {
                return Err(SchemaError::DuplicateKey { table, external });
            }
            if let Some(first) = map.reverse.get(&internal) {
                return Err(SchemaError::NonInjective {
                    table,
                    first: first.clone(),
                    second: external,
                    internal,
                });
            }

            let _ = map.forward.insert(external.clone(), internal.clone());
            let _ = map.reverse.insert(internal.clone(), external.clone());
            map.entries.push((external, internal));
        }
        Ok(map)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, i)| (e.as_str(), i.as_str()))
    }
}

/// External -> internal field-name table. Guaranteed injective.
#[derive(Debug, Clone, Default)]
pub struct FieldMap(InjectiveMap);

impl FieldMap {
    /// Build a field table, rejecting duplicate or colliding entries.
    pub fn new<I, E, N>(pairs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (E, N)>,
        E: Into<String>,
        N: Into<String>,
    {
        InjectiveMap::build(TableKind::Field, pairs).map(Self)
    }

    /// Internal name for an external field, if mapped.
    pub fn to_internal(&self, external: &str) -> Option<&str> {
        self.0.forward.get(external).map(String::as_str)
    }

    /// External name for an internal field, if mapped.
    pub fn to_external(&self, internal: &str) -> Option<&str> {
        self.0.reverse.get(internal).map(String::as_str)
    }

    /// `(external, internal)` pairs in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }
}

/// External -> internal enum-value table. Guaranteed injective.
#[derive(Debug, Clone, Default)]
pub struct ValueMap(InjectiveMap);

impl ValueMap {
    /// Build a value table, rejecting duplicate or colliding entries.
    pub fn new<I, E, N>(pairs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (E, N)>,
        E: Into<String>,
        N: Into<String>,
    {
        InjectiveMap::build(TableKind::Value, pairs).map(Self)
    }

    /// Internal spelling of an external value, if mapped.
    pub fn to_internal(&self, external: &str) -> Option<&str> {
        self.0.forward.get(external).map(String::as_str)
    }

    /// External spelling of an internal value, if mapped.
    pub fn to_external(&self, internal: &str) -> Option<&str> {
        self.0.reverse.get(internal).map(String::as_str)
    }

    /// `(external, internal)` pairs in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tables::{FIELD_PAIRS, VALUE_PAIRS};

    #[test]
    fn test_configured_field_table_is_rejected() {
        let err = FieldMap::new(FIELD_PAIRS.iter().copied()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::NonInjective {
                table: TableKind::Field,
                internal: "tipo".to_string(),
                first: "doc_type".to_string(),
                second: "type".to_string(),
            }
        );
    }

    #[test]
    fn test_configured_value_table_is_injective() {
        let values = ValueMap::new(VALUE_PAIRS.iter().copied()).unwrap();
        assert_eq!(values.len(), VALUE_PAIRS.len());
        assert_eq!(values.to_internal("In Progress"), Some("Em Progresso"));
        assert_eq!(values.to_external("crítica"), Some("critical"));
        assert_eq!(values.to_internal("Alta"), None);
    }

    #[test]
    fn test_duplicate_external_key_is_rejected() {
        let err = FieldMap::new([("title", "titulo"), ("title", "nome")]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateKey { table: TableKind::Field, external: "title".to_string() }
        );
    }

    #[test]
    fn test_value_collision_reports_value_table() {
        let err = ValueMap::new([("High", "Alta"), ("high", "Alta")]).unwrap_err();
        assert!(matches!(err, SchemaError::NonInjective { table: TableKind::Value, .. }));
    }

    #[test]
    fn test_identity_pairs_are_allowed() {
        let fields = FieldMap::new([("tags", "tags"), ("icon", "icon")]).unwrap();
        assert_eq!(fields.to_internal("tags"), Some("tags"));
        assert_eq!(fields.to_external("icon"), Some("icon"));
    }

    #[test]
    fn test_iter_keeps_given_order() {
        let fields = FieldMap::new([("b", "y"), ("a", "x")]).unwrap();
        let listed: Vec<_> = fields.iter().collect();
        assert_eq!(listed, vec![("b", "y"), ("a", "x")]);
        assert!(!fields.is_empty());
        assert!(FieldMap::default().is_empty());
    }
}
