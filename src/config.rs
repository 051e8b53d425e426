//! Config file discovery.
//!
//! The engine itself takes an explicit path; this layer finds
//! `payload.config.*` when the user does not pass one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Glob patterns tried in order when no config path is given.
///
/// Conventional locations first, then a recursive sweep as a last
/// resort. `node_modules` hits from the sweep are ignored.
pub const CONFIG_FILE_PATTERNS: &[&str] = &[
    "payload.config.ts",
    "payload.config.js",
    "src/payload.config.ts",
    "src/payload.config.js",
    "**/payload.config.ts",
    "**/payload.config.js",
];

/// Locate the root Payload config under `root`.
///
/// Returns the first match in pattern order; within one glob pattern,
/// matches come back in the glob crate's sorted order.
pub fn find_config_file(root: &Path) -> Result<PathBuf> {
    for pattern in CONFIG_FILE_PATTERNS {
        let full_pattern = root.join(pattern);
        let Some(pattern_str) = full_pattern.to_str() else {
            continue;
        };
        let paths = glob::glob(pattern_str)
            .with_context(|| format!("Invalid glob pattern: {pattern_str}"))?;

        for path in paths.flatten() {
            let in_node_modules = path
                .components()
                .any(|c| c.as_os_str() == "node_modules");
            if !in_node_modules {
                return Ok(path);
            }
        }
    }

    bail!("No payload.config.ts found under {}", root.display())
}
