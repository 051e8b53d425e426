//! Per-collection parsing: locate the collection's object literal and
//! extract slug, label, and field definitions.
//!
//! Property extraction is purely syntactic pattern matching on literal
//! shapes. Computed or referenced values are treated the same as absent
//! properties and fall back to the type's empty value.

use anyhow::{Result, bail};
use swc_ecma_ast::{
    Expr, Lit, Module, ObjectLit, Pat, Prop, PropName, PropOrSpread, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::imports::ImportMap;
use crate::core::model::{CollectionInfo, FieldInfo, FieldKind};
use crate::core::parser::parse_ts_source;
use crate::core::relationships::derive_relationships;
use crate::core::resolve::{load_source, resolve_specifier};
use crate::core::source::SourceReader;

/// Resolve and parse one collection identifier into a [`CollectionInfo`].
///
/// Fails when the identifier has no import binding, no candidate file
/// loads, the loaded file does not parse, or no object literal matches.
/// The caller treats any failure as "skip this collection".
pub fn parse_collection(
    name: &str,
    import_map: &ImportMap,
    config_dir: &str,
    reader: &dyn SourceReader,
) -> Result<CollectionInfo> {
    let Some(specifier) = import_map.get(name) else {
        bail!("no import found for collection `{name}`");
    };

    let candidate = resolve_specifier(specifier, config_dir);
    let Some((path, text)) = load_source(reader, &candidate) else {
        bail!("could not load a source file for `{name}` (tried `{candidate}` with known extensions)");
    };

    let parsed = parse_ts_source(text, &path)?;
    let Some(config) = find_collection_object(&parsed.module, name) else {
        bail!("no collection object literal found for `{name}` in {path}");
    };

    let slug = string_prop(&config, "slug");
    let label = optional_string_prop(&config, "label");
    let fields = extract_fields(&config);
    let relationships = derive_relationships(&fields, &slug);

    Ok(CollectionInfo {
        name: name.to_string(),
        slug,
        label,
        fields,
        relationships,
    })
}

/// Locate the object literal describing a collection.
///
/// First pass: a variable declarator named like the identifier whose
/// initializer is an object literal. Second pass: any object literal in
/// file order whose `slug` string equals the identifier (covers files
/// that export the object inline).
pub fn find_collection_object(module: &Module, name: &str) -> Option<ObjectLit> {
    let mut by_decl = DeclMatcher {
        name,
        found: None,
    };
    module.visit_with(&mut by_decl);
    if by_decl.found.is_some() {
        return by_decl.found;
    }

    let mut by_slug = SlugMatcher {
        name,
        found: None,
    };
    module.visit_with(&mut by_slug);
    by_slug.found
}

struct DeclMatcher<'a> {
    name: &'a str,
    found: Option<ObjectLit>,
}

impl Visit for DeclMatcher<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if self.found.is_none()
            && let Pat::Ident(binding) = &node.name
            && binding.id.sym.as_str() == self.name
            && let Some(init) = &node.init
            && let Expr::Object(obj) = &**init
        {
            self.found = Some(obj.clone());
            return;
        }
        node.visit_children_with(self);
    }
}

struct SlugMatcher<'a> {
    name: &'a str,
    found: Option<ObjectLit>,
}

impl Visit for SlugMatcher<'_> {
    fn visit_object_lit(&mut self, node: &ObjectLit) {
        if self.found.is_none()
            && let Some(Expr::Lit(Lit::Str(slug))) = object_prop(node, "slug")
            && slug.value.as_str() == Some(self.name)
        {
            self.found = Some(node.clone());
            return;
        }
        node.visit_children_with(self);
    }
}

/// Look up a key-value property's initializer by name. First match wins;
/// spreads, shorthand, and computed keys are skipped.
pub fn object_prop<'a>(obj: &'a ObjectLit, name: &str) -> Option<&'a Expr> {
    obj.props.iter().find_map(|prop| {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(kv) = &**prop else {
            return None;
        };
        (prop_name(&kv.key)? == name).then_some(&*kv.value)
    })
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// String property value; empty string when absent or not a plain string
/// literal.
pub fn string_prop(obj: &ObjectLit, name: &str) -> String {
    match object_prop(obj, name) {
        Some(Expr::Lit(Lit::Str(s))) => s.value.to_string_lossy().into_owned(),
        _ => String::new(),
    }
}

/// Optional string property; `None` when absent or not a plain string
/// literal.
pub fn optional_string_prop(obj: &ObjectLit, name: &str) -> Option<String> {
    match object_prop(obj, name) {
        Some(Expr::Lit(Lit::Str(s))) => Some(s.value.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Boolean property; only the literal `true`/`false` tokens are
/// recognized, anything else is `false`.
pub fn bool_prop(obj: &ObjectLit, name: &str) -> bool {
    match object_prop(obj, name) {
        Some(Expr::Lit(Lit::Bool(b))) => b.value,
        _ => false,
    }
}

/// Extract the collection's `fields` array.
///
/// A missing `fields` property or one that is not an array literal yields
/// an empty list. Elements that are not object literals, or that lack a
/// `name` or `type` string, are dropped silently.
pub fn extract_fields(config: &ObjectLit) -> Vec<FieldInfo> {
    let Some(Expr::Array(fields)) = object_prop(config, "fields") else {
        return Vec::new();
    };

    fields
        .elems
        .iter()
        .flatten()
        .filter(|element| element.spread.is_none())
        .filter_map(|element| match &*element.expr {
            Expr::Object(field) => parse_field(field),
            _ => None,
        })
        .collect()
}

fn parse_field(field: &ObjectLit) -> Option<FieldInfo> {
    let name = string_prop(field, "name");
    let kind = string_prop(field, "type");
    if name.is_empty() || kind.is_empty() {
        return None;
    }

    let has_many = bool_prop(field, "hasMany");

    Some(FieldInfo {
        name,
        kind: FieldKind::parse(&kind),
        relation_to: optional_string_prop(field, "relationTo"),
        has_many: has_many.then_some(true),
    })
}
