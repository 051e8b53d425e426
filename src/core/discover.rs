//! Collection discovery: find the `buildConfig` call and read its
//! `collections` array.

use swc_ecma_ast::{CallExpr, Callee, Expr, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collection::object_prop;

/// Well-known name of the config-builder function.
pub const CONFIG_BUILDER: &str = "buildConfig";

/// Collect collection identifier names from every `buildConfig` call in
/// the root config, in source order.
///
/// A bare identifier element contributes its name; a member expression
/// (`Admins.Collection`) contributes the base identifier. Other element
/// shapes are skipped. Lists from multiple calls are concatenated without
/// deduplication.
pub fn find_collection_identifiers(module: &Module) -> Vec<String> {
    let mut finder = ConfigCallFinder {
        identifiers: Vec::new(),
    };
    module.visit_with(&mut finder);
    finder.identifiers
}

struct ConfigCallFinder {
    identifiers: Vec<String>,
}

impl ConfigCallFinder {
    fn collect_from_call(&mut self, node: &CallExpr) {
        let Callee::Expr(callee) = &node.callee else {
            return;
        };
        let Expr::Ident(ident) = &**callee else {
            return;
        };
        if ident.sym.as_str() != CONFIG_BUILDER {
            return;
        }

        let Some(arg) = node.args.first() else {
            return;
        };
        if arg.spread.is_some() {
            return;
        }
        let Expr::Object(config) = &*arg.expr else {
            return;
        };

        let Some(Expr::Array(collections)) = object_prop(config, "collections") else {
            return;
        };

        for element in collections.elems.iter().flatten() {
            if element.spread.is_some() {
                continue;
            }
            match &*element.expr {
                Expr::Ident(ident) => self.identifiers.push(ident.sym.to_string()),
                Expr::Member(member) => {
                    if let Expr::Ident(base) = &*member.obj {
                        self.identifiers.push(base.sym.to_string());
                    }
                }
                _ => {}
            }
        }
    }
}

impl Visit for ConfigCallFinder {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.collect_from_call(node);
        node.visit_children_with(self);
    }
}
