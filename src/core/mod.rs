//! Config-to-graph extraction engine.
//!
//! A single forward pass over immutable inputs:
//! config file → import map + collection identifier list → per-collection
//! file resolution → object literal → fields → relationships. The engine
//! never executes the configuration code and holds no state between runs.

pub mod collection;
pub mod discover;
pub mod extract;
pub mod imports;
pub mod model;
pub mod parser;
pub mod relationships;
pub mod resolve;
pub mod source;

pub use extract::{ExtractResult, SkippedCollection, extract_collections};
pub use model::{CollectionInfo, FieldInfo, FieldKind, ImportBinding, RelationType, RelationshipInfo};
pub use source::{FsReader, MemorySource, SourceReader};
