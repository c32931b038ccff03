//! Validated add/rename/remove operations over the document store.
//!
//! Every argument arrives as untrusted text from the prompt. Parsing and
//! validation happen here; on any error the store is left untouched.

use thiserror::Error;
use tracing::{debug, info};

use super::store::{DocumentStore, StoreError};
use crate::config::CatalogSettings;
use crate::domain::{Document, DocumentId, FileType, MAX_YEAR, MIN_YEAR};

/// Malformed or out-of-range input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid year '{0}': expected an integer")]
    InvalidYear(String),

    #[error("Year {0} is outside the accepted range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    #[error("Invalid file type '{0}': choose one of {types}", types = FileType::labels())]
    UnknownFileType(String),

    #[error("Invalid ID '{0}': expected an integer")]
    InvalidId(String),
}

/// Failure of a command operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Document with ID {0} not found")]
    NotFound(DocumentId),

    #[error("The library has no documents")]
    EmptyStore,
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CommandError::NotFound(id),
        }
    }
}

/// Raw answers collected for a new document
#[derive(Debug, Clone, Copy)]
pub struct AddRequest<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub year: &'a str,
    pub file_type: &'a str,
}

/// Result of a rename that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },

    /// New title equals the current one; nothing changed
    AlreadyCurrent,
}

/// Result of a remove that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Document),

    /// Confirmation was not affirmative; nothing changed
    Cancelled,
}

/// Require non-empty text after trimming
pub fn require_text<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

/// Parse a publication year and check the accepted range
pub fn parse_year(text: &str) -> Result<i32, ValidationError> {
    let text = text.trim();
    let year: i32 = text
        .parse()
        .map_err(|_| ValidationError::InvalidYear(text.to_string()))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::YearOutOfRange(year));
    }
    Ok(year)
}

/// Parse a file type label (case-insensitive)
pub fn parse_file_type(text: &str) -> Result<FileType, ValidationError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| ValidationError::UnknownFileType(text.to_string()))
}

/// Parse a document id
pub fn parse_id(text: &str) -> Result<DocumentId, ValidationError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| ValidationError::InvalidId(text.to_string()))
}

/// Placeholder file path derived from the title slug and the extension
pub fn placeholder_path(root: &str, title: &str, file_type: FileType) -> String {
    let slug = title.replace(' ', "_").to_lowercase();
    format!("{}/{}.{}", root.trim_end_matches('/'), slug, file_type)
}

/// Validate the answers and create the document
pub fn add<'s>(
    store: &'s mut DocumentStore,
    settings: &CatalogSettings,
    request: AddRequest<'_>,
) -> Result<&'s Document, CommandError> {
    let title = require_text("Title", request.title)?;
    let author = require_text("Author", request.author)?;
    let year = parse_year(request.year)?;
    let file_type = parse_file_type(request.file_type)?;

    let path = placeholder_path(&settings.documents_root, title, file_type);
    Ok(store.create(title, author, year, file_type.as_str(), path))
}

/// Check that the store has documents and that `id_text` names one of them
pub fn resolve<'s>(store: &'s DocumentStore, id_text: &str) -> Result<&'s Document, CommandError> {
    if store.is_empty() {
        return Err(CommandError::EmptyStore);
    }
    let id = parse_id(id_text)?;
    store.get(id).ok_or(CommandError::NotFound(id))
}

/// Change the title of an existing document
pub fn rename(
    store: &mut DocumentStore,
    id_text: &str,
    new_title: &str,
) -> Result<RenameOutcome, CommandError> {
    let current = resolve(store, id_text)?;
    let id = current.id;
    let new_title = require_text("New title", new_title)?;

    if new_title == current.title {
        debug!(id, "Rename skipped, title unchanged");
        return Ok(RenameOutcome::AlreadyCurrent);
    }

    let from = current.title.clone();
    store.rename(id, new_title)?;
    Ok(RenameOutcome::Renamed {
        from,
        to: new_title.to_string(),
    })
}

/// Remove a document once the operator confirms
pub fn remove(
    store: &mut DocumentStore,
    settings: &CatalogSettings,
    id_text: &str,
    confirmation: &str,
) -> Result<RemoveOutcome, CommandError> {
    let id = resolve(store, id_text)?.id;

    if !settings.is_affirmative(confirmation) {
        info!(id, "Removal cancelled");
        return Ok(RemoveOutcome::Cancelled);
    }

    Ok(RemoveOutcome::Removed(store.remove(id)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(title: &'a str, year: &'a str, file_type: &'a str) -> AddRequest<'a> {
        AddRequest {
            title,
            author: "Ana Paula",
            year,
            file_type,
        }
    }

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year("1000"), Ok(1000));
        assert_eq!(parse_year(" 2100 "), Ok(2100));
        assert_eq!(parse_year("999"), Err(ValidationError::YearOutOfRange(999)));
        assert_eq!(parse_year("2101"), Err(ValidationError::YearOutOfRange(2101)));
        assert_eq!(
            parse_year("20x1"),
            Err(ValidationError::InvalidYear("20x1".to_string()))
        );
    }

    #[test]
    fn test_parse_file_type_case_insensitive() {
        assert_eq!(parse_file_type(" EPUB "), Ok(FileType::Epub));
        assert!(matches!(
            parse_file_type("rtf"),
            Err(ValidationError::UnknownFileType(_))
        ));
    }

    #[test]
    fn test_placeholder_path() {
        assert_eq!(
            placeholder_path("path/to/documents", "Manual de Git", FileType::Pdf),
            "path/to/documents/manual_de_git.pdf"
        );
        assert_eq!(
            placeholder_path("/srv/docs/", "A B", FileType::Txt),
            "/srv/docs/a_b.txt"
        );
    }

    #[test]
    fn test_add_uses_settings_root() {
        let mut store = DocumentStore::new();
        let settings = CatalogSettings {
            documents_root: "/lib".to_string(),
            ..Default::default()
        };

        let doc = add(&mut store, &settings, request("Guia Python", "2021", "PDF")).unwrap();
        assert_eq!(doc.file_path, "/lib/guia_python.pdf");
        assert_eq!(doc.file_type, "pdf");
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut store = DocumentStore::new();
        let result = add(&mut store, &CatalogSettings::default(), request("   ", "2021", "pdf"));

        assert_eq!(
            result.unwrap_err(),
            CommandError::Validation(ValidationError::EmptyField("Title"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_rename_empty_store() {
        let mut store = DocumentStore::new();
        assert_eq!(rename(&mut store, "1", "X"), Err(CommandError::EmptyStore));
    }

    #[test]
    fn test_rename_rejects_bad_id_text() {
        let mut store = DocumentStore::new();
        store.create("A", "Ana", 2020, "pdf", "");

        assert_eq!(
            rename(&mut store, "one", "X"),
            Err(CommandError::Validation(ValidationError::InvalidId("one".to_string())))
        );
    }
}
