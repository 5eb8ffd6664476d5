//! Raw translation tables between the dashboard (EN) and backend (PT) schemas.
//!
//! These are plain pair lists. Nothing here is validated; `FieldMap::new` and
//! `ValueMap::new` enforce injectivity when the tables are loaded.

use kalu_types::RecordKind;

/// Field names, external -> internal, exactly as the dashboard adapter ships them.
///
/// Not injective: `doc_type` and `type` both map to `tipo`. Loading this
/// table as-is fails; see [`field_pairs_for`] for the per-kind split.
pub const FIELD_PAIRS: &[(&str, &str)] = &[
    // Task fields
    ("title", "titulo"),
    ("description", "descricao"),
    ("company", "empresa"),
    ("priority", "prioridade"),
    ("tags", "tags"),
    ("deadline", "deadline"),
    ("result", "resultado"),
    ("result_type", "resultado_tipo"),
    ("result_url", "resultado_url"),
    // Document fields
    ("doc_type", "tipo"),
    ("content", "conteudo"),
    ("project", "projeto"),
    ("version", "versao"),
    // Memory fields
    ("type", "tipo"),
    ("category", "categoria"),
    ("importance", "importancia"),
    ("context", "contexto"),
    // Activity fields
    ("icon", "icon"),
    ("actor", "actor"),
    // Calendar fields
    ("start_date", "start_date"),
    ("end_date", "end_date"),
    ("all_day", "all_day"),
    ("recurring", "recorrente"),
    ("recurrence", "recorrencia"),
    ("color", "cor"),
];

/// Enum values, external -> internal. Applied to string leaves regardless of field.
pub const VALUE_PAIRS: &[(&str, &str)] = &[
    // Priority
    ("High", "Alta"),
    ("Medium", "Média"),
    ("Low", "Baixa"),
    // Status
    ("Pending", "Pendente"),
    ("In Progress", "Em Progresso"),
    ("Completed", "Concluído"),
    ("Cancelled", "Cancelado"),
    // Importance
    ("low", "baixa"),
    ("normal", "normal"),
    ("high", "alta"),
    ("critical", "crítica"),
    // Memory type
    ("conversation", "conversa"),
    ("decision", "decisão"),
    ("lesson", "lição"),
    ("fact", "facto"),
];

/// Entries of [`FIELD_PAIRS`] that are only valid for some record kinds.
const SCOPED_FIELDS: &[(&str, &[RecordKind])] = &[
    ("doc_type", &[RecordKind::Document]),
    ("type", &[RecordKind::Memory, RecordKind::Activity, RecordKind::Calendar]),
];

/// Field pairs in effect for `kind`, in table order.
///
/// Unscoped pairs apply to every kind. A scoped pair is included only for
/// the kinds listed in `SCOPED_FIELDS`; `None` (paths outside the record
/// collections) gets unscoped pairs only.
pub fn field_pairs_for(
    kind: Option<RecordKind>,
) -> impl Iterator<Item = (&'static str, &'static str)> {
    FIELD_PAIRS.iter().copied().filter(move |(external, _)| {
        match SCOPED_FIELDS.iter().find(|(name, _)| name == external) {
            Some((_, kinds)) => kind.is_some_and(|k| kinds.contains(&k)),
            None => true,
        }
    })
}
