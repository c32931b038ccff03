//! Grouping of documents into per-type buckets.
//!
//! Every known file type always has a bucket, even when empty. Each bucket
//! is sorted by (year, author) with a stable sort, so documents sharing both
//! keep the order they had in the input.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::{Document, FileType};

/// Documents grouped by known file type
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    buckets: BTreeMap<FileType, Vec<&'a Document>>,

    /// Documents whose type is not one of the known types
    skipped: Vec<&'a Document>,
}

impl<'a> CatalogView<'a> {
    /// Documents of one type, sorted
    pub fn bucket(&self, file_type: FileType) -> &[&'a Document] {
        self.buckets
            .get(&file_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over all buckets in declaration order
    pub fn buckets(&self) -> impl Iterator<Item = (FileType, &[&'a Document])> + '_ {
        self.buckets.iter().map(|(t, docs)| (*t, docs.as_slice()))
    }

    /// Documents left out because of an unknown type
    pub fn skipped(&self) -> &[&'a Document] {
        &self.skipped
    }

    /// Number of grouped documents across all buckets
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Check if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

/// Partition documents by file type and sort each bucket by (year, author)
pub fn group_by_type<'a>(documents: impl IntoIterator<Item = &'a Document>) -> CatalogView<'a> {
    let mut buckets: BTreeMap<FileType, Vec<&'a Document>> =
        FileType::ALL.iter().map(|t| (*t, Vec::new())).collect();
    let mut skipped = Vec::new();

    for doc in documents {
        match doc.known_type() {
            Some(file_type) => buckets.entry(file_type).or_default().push(doc),
            None => {
                warn!(
                    id = doc.id,
                    title = %doc.title,
                    file_type = %doc.file_type,
                    "Document has an unexpected file type, skipping"
                );
                skipped.push(doc);
            }
        }
    }

    for docs in buckets.values_mut() {
        // sort_by is stable
        docs.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.author.cmp(&b.author)));
    }

    let view = CatalogView { buckets, skipped };
    debug!(grouped = view.total(), skipped = view.skipped.len(), "Catalog grouped");
    view
}
