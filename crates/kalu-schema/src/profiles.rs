//! Per-kind translators, built once and shared.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::map::{FieldMap, ValueMap};
use crate::tables::{field_pairs_for, VALUE_PAIRS};
use crate::translator::Translator;
use kalu_types::{RecordKind, SchemaError};

static STANDARD: LazyLock<Result<Arc<SchemaProfiles>, SchemaError>> =
    LazyLock::new(|| SchemaProfiles::standard().map(Arc::new));

/// Shared, validated profiles built from the configured tables.
///
/// The first call validates the tables; later calls return the same `Arc`.
pub fn standard_profiles() -> Result<Arc<SchemaProfiles>, SchemaError> {
    (*STANDARD).clone()
}

/// A general translator plus one translator per [`RecordKind`].
///
/// Immutable after construction, so it can be shared across tasks and
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct SchemaProfiles {
    general: Translator,
    by_kind: HashMap<RecordKind, Translator>,
}

impl SchemaProfiles {
    /// Build profiles from the configured field and value tables.
    pub fn standard() -> Result<Self, SchemaError> {
        let values = ValueMap::new(VALUE_PAIRS.iter().copied())?;
        let general = Translator::new(FieldMap::new(field_pairs_for(None))?, values.clone());

        let mut by_kind = HashMap::with_capacity(RecordKind::ALL.len());
        for kind in RecordKind::ALL {
            let fields = FieldMap::new(field_pairs_for(Some(kind)))?;
            let _ = by_kind.insert(kind, Translator::new(fields, values.clone()));
        }

        tracing::debug!(
            kinds = by_kind.len(),
            values = values.len(),
            "[Schema] Translation profiles ready"
        );
        Ok(Self { general, by_kind })
    }

    /// Use one translator for every path.
    pub fn uniform(translator: Translator) -> Self {
        Self { general: translator, by_kind: HashMap::new() }
    }

    /// Translator for paths outside the record collections.
    pub fn general(&self) -> &Translator {
        &self.general
    }

    /// Translator for `kind`, falling back to the general one.
    pub fn for_kind(&self, kind: Option<RecordKind>) -> &Translator {
        kind.and_then(|k| self.by_kind.get(&k)).unwrap_or(&self.general)
    }

    /// Translator for an API path such as `/documents/3`.
    pub fn for_path(&self, path: &str) -> &Translator {
        self.for_kind(RecordKind::from_path(path))
    }
}
