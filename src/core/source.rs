//! Source-reading capability injected into the engine.
//!
//! The engine never touches the file system directly: every load goes
//! through a [`SourceReader`], so the whole pipeline can run against an
//! in-memory file set in tests (and in hosts that already hold the file
//! contents).

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};

/// Read access to source files by path.
///
/// `Sync` is required so per-collection resolution can fan out across
/// rayon workers sharing one reader.
pub trait SourceReader: Sync {
    /// Read the full text of the file at `path`.
    ///
    /// A missing or unreadable file is an `Err`; the caller decides
    /// whether that is fatal (root config) or a per-collection skip.
    fn read(&self, path: &str) -> Result<String>;
}

/// Reader backed by the real file system.
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }
}

/// In-memory file set, registered as path → source text.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file; replaces any previous content at the same path.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl SourceReader for MemorySource {
    fn read(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .with_context(|| format!("No such file: {path}"))
    }
}
