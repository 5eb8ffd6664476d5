//! Recursive record translation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::map::{FieldMap, ValueMap};
use kalu_types::SchemaError;

/// Which way a record is being translated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Dashboard (EN) -> backend (PT), applied to outgoing bodies
    ToInternal,
    /// Backend (PT) -> dashboard (EN), applied to incoming bodies
    ToExternal,
}

/// Pure, stateless translator over one field table and one value table.
///
/// Keys are looked up only in the field table and string leaves only in the
/// value table. Anything not found passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    fields: FieldMap,
    values: ValueMap,
}

impl Translator {
    pub fn new(fields: FieldMap, values: ValueMap) -> Self {
        Self { fields, values }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// Translate an external record into backend naming.
    #[must_use]
    pub fn to_internal(&self, record: &Value) -> Value {
        self.translate(record, Direction::ToInternal)
    }

    /// Translate a backend record into external naming.
    #[must_use]
    pub fn to_external(&self, record: &Value) -> Value {
        self.translate(record, Direction::ToExternal)
    }

    #[must_use]
    pub fn translate(&self, record: &Value, direction: Direction) -> Value {
        match record {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(n.clone()),
            Value::String(s) => {
                Value::String(self.value_name(s, direction).unwrap_or(s.as_str()).to_owned())
            },
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.translate(item, direction)).collect())
            },
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, inner) in map {
                    let name = self.field_name(key, direction).unwrap_or(key.as_str());
                    if out.insert(name.to_owned(), self.translate(inner, direction)).is_some() {
                        tracing::warn!(
                            key = name,
                            ?direction,
                            "[Schema] Two source keys translate to the same key, keeping the later one"
                        );
                    }
                }
                Value::Object(out)
            },
        }
    }

    /// Serialize a typed record and translate it.
    ///
    /// Fails with `MalformedInput` when the record has no JSON form (for
    /// example a map keyed by non-strings).
    pub fn translate_serializable<T>(
        &self,
        record: &T,
        direction: Direction,
    ) -> Result<Value, SchemaError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(record).map_err(|e| SchemaError::from_json_error(&e))?;
        Ok(self.translate(&value, direction))
    }

    fn field_name(&self, key: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::ToInternal => self.fields.to_internal(key),
            Direction::ToExternal => self.fields.to_external(key),
        }
    }

    fn value_name(&self, value: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::ToInternal => self.values.to_internal(value),
            Direction::ToExternal => self.values.to_external(value),
        }
    }
}
