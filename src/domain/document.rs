//! Catalog entries and the fixed set of known file types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Identifier assigned by the store, never reused
pub type DocumentId = u64;

/// Lowest publication year accepted by the add command
pub const MIN_YEAR: i32 = 1000;

/// Highest publication year accepted by the add command
pub const MAX_YEAR: i32 = 2100;

/// A single catalog entry
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: DocumentId,

    pub title: String,

    /// Author name, trimmed at construction
    pub author: String,

    /// Publication year. Range is enforced by the add command, not here.
    pub year: i32,

    /// File type label, lowercased at construction. May be outside the
    /// known set; the catalog view skips such documents.
    pub file_type: String,

    /// Placeholder location of the file (may be empty)
    pub file_path: String,
}

impl Document {
    /// Create a document, normalizing author and file type
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        author: &str,
        year: i32,
        file_type: &str,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.trim().to_string(),
            year,
            file_type: file_type.to_lowercase(),
            file_path: file_path.into(),
        }
    }

    /// The known file type of this document, if any
    pub fn known_type(&self) -> Option<FileType> {
        self.file_type.parse().ok()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document(ID: {}, Title: '{}', Author: '{}', Year: {}, Type: '{}')",
            self.id, self.title, self.author, self.year, self.file_type
        )
    }
}

/// The file types eligible for grouping.
///
/// Declaration order is the bucket order of a freshly grouped view; display
/// order is alphabetical by label (see [`FileType::alphabetical`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Epub,
    Docx,
    Txt,
    Mobi,
    Azw,
}

impl FileType {
    /// All known types in declaration order
    pub const ALL: [FileType; 6] = [
        FileType::Pdf,
        FileType::Epub,
        FileType::Docx,
        FileType::Txt,
        FileType::Mobi,
        FileType::Azw,
    ];

    /// Lowercase label, also used as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Epub => "epub",
            FileType::Docx => "docx",
            FileType::Txt => "txt",
            FileType::Mobi => "mobi",
            FileType::Azw => "azw",
        }
    }

    /// All known types sorted by label
    pub fn alphabetical() -> [FileType; 6] {
        let mut types = Self::ALL;
        types.sort_by_key(|t| t.as_str());
        types
    }

    /// Comma-separated list of labels, for prompts and messages
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the known file types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown file type: {0}")]
pub struct UnknownFileType(pub String);

impl FromStr for FileType {
    type Err = UnknownFileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(FileType::Pdf),
            "epub" => Ok(FileType::Epub),
            "docx" => Ok(FileType::Docx),
            "txt" => Ok(FileType::Txt),
            "mobi" => Ok(FileType::Mobi),
            "azw" => Ok(FileType::Azw),
            _ => Err(UnknownFileType(s.to_string())),
        }
    }
}
