//! Relationship derivation from extracted fields.

use crate::core::model::{FieldInfo, FieldKind, RelationType, RelationshipInfo};

/// Derive directed relationship edges from a collection's fields.
///
/// Pure and deterministic: one edge per relationship-typed field with a
/// non-empty target, in field order. `hasMany: true` yields a `hasMany`
/// edge, everything else `belongsTo`; `hasOne` and `belongsToMany` are
/// never produced here.
pub fn derive_relationships(fields: &[FieldInfo], slug: &str) -> Vec<RelationshipInfo> {
    fields
        .iter()
        .filter(|field| field.kind == FieldKind::Relationship)
        .filter_map(|field| {
            let target = field.relation_to.as_deref().filter(|t| !t.is_empty())?;
            Some(RelationshipInfo {
                from_collection: slug.to_string(),
                from_field: field.name.clone(),
                to_collection: target.to_string(),
                relation_type: if field.has_many == Some(true) {
                    RelationType::HasMany
                } else {
                    RelationType::BelongsTo
                },
            })
        })
        .collect()
}
