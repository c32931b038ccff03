//! biblio - digital library catalog manager
//!
//! Keeps a catalog of documents in memory, lets an operator add, rename
//! and remove entries from an interactive menu, and lists the catalog
//! grouped by file type.
//!
//! # Architecture
//!
//! - Nothing is persisted; the store lives as long as the session
//! - Commands validate raw text before touching the store
//! - The listing borrows from the store and never copies documents
//!
//! # Modules
//!
//! - `domain`: Data structures (Document, FileType)
//! - `core`: Document store and validated commands
//! - `library`: Grouping, rendering and sample data
//! - `config`: Layered settings
//! - `cli`: Command-line interface and interactive shell
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu with the sample documents loaded
//! biblio
//!
//! # Grouped listing of the demonstration catalog
//! biblio demo --format json
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::core::{CommandError, DocumentStore, RemoveOutcome, RenameOutcome, ValidationError};
pub use domain::{Document, DocumentId, FileType};
pub use library::{group_by_type, render, CatalogView};
