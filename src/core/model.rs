//! Entity model produced by the extraction engine.
//!
//! Everything here is plain data: built once per extraction run, never
//! mutated afterwards, and serialized as-is for the rendering layer.
//! Wire names follow the Payload conventions the renderer expects
//! (`relationTo`, `fromCollection`, ...), so serde renames are explicit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One imported identifier binding in a source file.
///
/// `import Admins from './collections/Admins'` produces
/// `{ local_name: "Admins", module_specifier: "./collections/Admins" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Local name bound in the importing file (the alias, if one is used).
    pub local_name: String,
    /// Module specifier text as written in the import statement.
    pub module_specifier: String,
}

/// Field kind as declared in a collection's `fields` array.
///
/// Covers the built-in Payload field types; anything else is carried
/// through verbatim as `Other` so unknown kinds still round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Email,
    Code,
    Json,
    Date,
    Point,
    Checkbox,
    Select,
    Radio,
    Relationship,
    Upload,
    RichText,
    Array,
    Blocks,
    Group,
    Other(String),
}

impl FieldKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "email" => Self::Email,
            "code" => Self::Code,
            "json" => Self::Json,
            "date" => Self::Date,
            "point" => Self::Point,
            "checkbox" => Self::Checkbox,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "relationship" => Self::Relationship,
            "upload" => Self::Upload,
            "richText" => Self::RichText,
            "array" => Self::Array,
            "blocks" => Self::Blocks,
            "group" => Self::Group,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Email => "email",
            Self::Code => "code",
            Self::Json => "json",
            Self::Date => "date",
            Self::Point => "point",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Relationship => "relationship",
            Self::Upload => "upload",
            Self::RichText => "richText",
            Self::Array => "array",
            Self::Blocks => "blocks",
            Self::Group => "group",
            Self::Other(other) => other,
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// One declared field of a collection.
///
/// `relation_to` and `has_many` only carry meaning for
/// `FieldKind::Relationship`; they are extracted for every field but the
/// deriver ignores them elsewhere. `has_many` is `Some(true)` or absent —
/// a literal `hasMany: false` is indistinguishable from no `hasMany` at
/// all, matching the renderer's expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_many: Option<bool>,
}

/// Direction/cardinality of a derived relationship edge.
///
/// Only `HasMany` and `BelongsTo` are currently produced; `HasOne` and
/// `BelongsToMany` are reserved for bidirectional inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    HasOne,
    HasMany,
    BelongsTo,
    BelongsToMany,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasOne => "hasOne",
            Self::HasMany => "hasMany",
            Self::BelongsTo => "belongsTo",
            Self::BelongsToMany => "belongsToMany",
        }
    }
}

/// A directed relationship edge between two collections.
///
/// Always derived 1:1 from a relationship-typed field with a target;
/// never authored directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipInfo {
    /// Slug of the collection declaring the field.
    pub from_collection: String,
    /// Name of the declaring field.
    pub from_field: String,
    /// Target slug as written in `relationTo` (not validated to exist).
    pub to_collection: String,
    pub relation_type: RelationType,
}

/// One successfully resolved collection from the config's collections list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    /// Identifier as written in the config file.
    pub name: String,
    /// `slug` property value; empty string when the property is absent or
    /// not a plain string literal.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub fields: Vec<FieldInfo>,
    pub relationships: Vec<RelationshipInfo>,
}
