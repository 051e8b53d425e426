//! Import resolution: local identifier → module specifier.
//!
//! Only top-level import declarations matter for config files, so this
//! walks `module.body` directly instead of a full AST visit.

use std::collections::HashMap;

use swc_ecma_ast::{ImportSpecifier, Module, ModuleDecl, ModuleItem};

use crate::core::model::ImportBinding;

/// Local identifier → module specifier, last import statement wins.
pub type ImportMap = HashMap<String, String>;

/// Collect every imported identifier binding in file order.
///
/// Default imports bind their local name; named imports bind the alias
/// when one is present, otherwise the imported name. Namespace imports
/// (`import * as ns`) bind the namespace's local name so the
/// `ns.Collection` authoring style still resolves to a file.
pub fn import_bindings(module: &Module) -> Vec<ImportBinding> {
    let mut bindings = Vec::new();

    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
            continue;
        };
        let Some(specifier_text) = import.src.value.as_str() else {
            continue;
        };

        for specifier in &import.specifiers {
            let local_name = match specifier {
                ImportSpecifier::Default(default) => default.local.sym.to_string(),
                ImportSpecifier::Named(named) => named.local.sym.to_string(),
                ImportSpecifier::Namespace(ns) => ns.local.sym.to_string(),
            };
            bindings.push(ImportBinding {
                local_name,
                module_specifier: specifier_text.to_string(),
            });
        }
    }

    bindings
}

/// Build the lookup map used by collection resolution.
pub fn build_import_map(module: &Module) -> ImportMap {
    import_bindings(module)
        .into_iter()
        .map(|binding| (binding.local_name, binding.module_specifier))
        .collect()
}
