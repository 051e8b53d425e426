//! Paygraph - collection graph extraction for Payload CMS configs
//!
//! Paygraph is a CLI tool and library that statically discovers the
//! collections declared in a `payload.config.ts`, their field
//! definitions, and the relationship edges those fields imply. The
//! config is never executed; extraction is a read-only structural pass
//! over the syntax tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Config file discovery (`payload.config.*` glob search)
//! - `core`: Extraction engine (imports, discovery, parsing, relationships)

pub mod cli;
pub mod config;
pub mod core;
