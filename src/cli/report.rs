//! Report formatting and printing utilities.
//!
//! Machine output (JSON, edge lists) goes to stdout; summaries and
//! warnings go to stderr so downstream tools can pipe the data.

use colored::Colorize;

use crate::core::{CollectionInfo, ExtractResult, SkippedCollection};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print one warning line per skipped collection to stderr.
pub fn print_warnings(skipped: &[SkippedCollection]) {
    for skip in skipped {
        eprintln!(
            "{}: skipped collection `{}`: {}",
            "warning".bold().yellow(),
            skip.name,
            skip.reason
        );
    }
}

/// Print the run summary to stderr.
pub fn print_summary(result: &ExtractResult) {
    let relationship_count: usize = result
        .collections
        .iter()
        .map(|c| c.relationships.len())
        .sum();

    if result.skipped.is_empty() {
        eprintln!(
            "{} Discovered {} collection(s), {} relationship(s)",
            SUCCESS_MARK.green(),
            result.collections.len(),
            relationship_count
        );
    } else {
        eprintln!(
            "{} Discovered {} collection(s), {} relationship(s); {} skipped",
            FAILURE_MARK.yellow(),
            result.collections.len(),
            relationship_count,
            result.skipped.len()
        );
    }
}

/// Print the derived edge list to stdout, one edge per line.
pub fn print_relations(collections: &[CollectionInfo]) {
    for collection in collections {
        for edge in &collection.relationships {
            println!(
                "{}.{} {} {} ({})",
                edge.from_collection,
                edge.from_field.cyan(),
                "->".blue(),
                edge.to_collection,
                edge.relation_type.as_str().dimmed()
            );
        }
    }
}
