//! Domain types for the catalog.
//!
//! - Document: a single catalog entry
//! - FileType: the fixed set of types eligible for grouping

pub mod document;

pub use document::{Document, DocumentId, FileType, UnknownFileType, MAX_YEAR, MIN_YEAR};
