//! Read-only views over the catalog.
//!
//! - catalog: grouping into per-type buckets
//! - render: text and JSON output of a grouped view
//! - sample: built-in documents for startup and the demo listing

pub mod catalog;
pub mod render;
pub mod sample;

pub use catalog::{group_by_type, CatalogView};
pub use render::{render, render_json, render_sections, EMPTY_LIBRARY};
pub use sample::SeedDocument;
