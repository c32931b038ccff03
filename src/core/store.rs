//! In-memory document store.
//!
//! Documents are kept in insertion order. Ids come from a counter that only
//! moves forward, so a removed document's id is never handed out again.
//! Lookups are linear scans.

use thiserror::Error;
use tracing::info;

use crate::domain::{Document, DocumentId};

/// Errors raised by the store itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Document with ID {0} not found")]
    NotFound(DocumentId),
}

/// Ordered collection of documents plus the id generator
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    next_id: DocumentId,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create an empty store whose first id is 1
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new document and return it.
    ///
    /// Author is trimmed and file type lowercased. Year range and file type
    /// membership are not checked here; that is the add command's job.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        author: &str,
        year: i32,
        file_type: &str,
        file_path: impl Into<String>,
    ) -> &Document {
        let id = self.next_id;
        self.next_id += 1;

        let document = Document::new(id, title, author, year, file_type, file_path);
        info!(id, title = %document.title, "Document added");

        self.documents.push(document);
        &self.documents[self.documents.len() - 1]
    }

    /// Replace the title of a document
    pub fn rename(&mut self, id: DocumentId, new_title: impl Into<String>) -> Result<(), StoreError> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let new_title = new_title.into();
        info!(id, from = %document.title, to = %new_title, "Document renamed");
        document.title = new_title;
        Ok(())
    }

    /// Remove a document, keeping the relative order of the rest
    pub fn remove(&mut self, id: DocumentId) -> Result<Document, StoreError> {
        let pos = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = self.documents.remove(pos);
        info!(id, title = %removed.title, "Document removed");
        Ok(removed)
    }

    /// Get a document by id
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// All documents in insertion order
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// The id the next created document will receive
    pub fn next_id(&self) -> DocumentId {
        self.next_id
    }

    /// Get the number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = DocumentStore::new();
        let first = store.create("A", "Ana", 2020, "pdf", "").id;
        let second = store.create("B", "Bia", 2021, "epub", "").id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = DocumentStore::new();
        store.create("A", "Ana", 2020, "pdf", "");
        let id = store.create("B", "Bia", 2021, "epub", "").id;

        store.remove(id).unwrap();
        let next = store.create("C", "Caio", 2022, "txt", "").id;

        assert_eq!(next, 3);
    }

    #[test]
    fn test_rename_missing_id() {
        let mut store = DocumentStore::new();
        store.create("A", "Ana", 2020, "pdf", "");

        assert_eq!(store.rename(42, "New"), Err(StoreError::NotFound(42)));
        assert_eq!(store.all()[0].title, "A");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = DocumentStore::new();
        store.create("A", "Ana", 2020, "pdf", "");
        store.create("B", "Bia", 2021, "pdf", "");
        store.create("C", "Caio", 2022, "pdf", "");

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.title, "B");

        let titles: Vec<_> = store.all().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
        assert_eq!(store.remove(2), Err(StoreError::NotFound(2)));
    }
}
