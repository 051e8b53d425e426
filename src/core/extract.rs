//! Orchestration of the full config-to-graph extraction pass.

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::collection::parse_collection;
use crate::core::discover::find_collection_identifiers;
use crate::core::imports::build_import_map;
use crate::core::model::CollectionInfo;
use crate::core::parser::parse_ts_source;
use crate::core::source::SourceReader;

/// A collection identifier that could not be resolved, with the reason.
///
/// Skips are diagnostics, not errors: the caller decides how to surface
/// them.
#[derive(Debug, Clone)]
pub struct SkippedCollection {
    pub name: String,
    pub reason: String,
}

/// Result of one extraction run.
#[derive(Debug, Default)]
pub struct ExtractResult {
    /// Resolved collections, in config declaration order.
    pub collections: Vec<CollectionInfo>,
    /// Identifiers dropped along the way, in declaration order.
    pub skipped: Vec<SkippedCollection>,
}

/// Extract every collection reachable from the root config file.
///
/// Only two failures are fatal: the config file being unreadable and the
/// config file not parsing. Everything per-collection degrades to an
/// entry in `skipped`.
///
/// Per-collection parsing fans out across rayon workers; each worker
/// resolves its own file and builds its own syntax tree, and the indexed
/// collect keeps output order aligned with declaration order rather than
/// completion order.
pub fn extract_collections(config_path: &str, reader: &dyn SourceReader) -> Result<ExtractResult> {
    let source = reader
        .read(config_path)
        .with_context(|| format!("Could not load config file at: {config_path}"))?;
    let parsed = parse_ts_source(source, config_path)
        .with_context(|| format!("Could not parse config file at: {config_path}"))?;

    let config_dir = parent_dir(config_path);
    let import_map = build_import_map(&parsed.module);
    let identifiers = find_collection_identifiers(&parsed.module);

    let outcomes: Vec<(String, Result<CollectionInfo>)> = identifiers
        .par_iter()
        .map(|name| {
            let outcome = parse_collection(name, &import_map, &config_dir, reader);
            (name.clone(), outcome)
        })
        .collect();

    let mut result = ExtractResult::default();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(collection) => result.collections.push(collection),
            Err(err) => result.skipped.push(SkippedCollection {
                name,
                reason: err.to_string(),
            }),
        }
    }

    Ok(result)
}

/// Directory of the config file, as a string the path resolver can
/// concatenate onto.
fn parent_dir(config_path: &str) -> String {
    let parent = std::path::Path::new(config_path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    if parent.is_empty() {
        ".".to_string()
    } else {
        parent
    }
}
