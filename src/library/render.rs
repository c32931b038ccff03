//! Text and JSON rendering of a grouped catalog.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::domain::{Document, FileType};

use super::catalog::CatalogView;

/// Message printed instead of the per-type sections when nothing is grouped
pub const EMPTY_LIBRARY: &str = "--- The library is empty. There are no documents to display. ---";

/// Render the full listing.
///
/// When every bucket is empty the output is the single empty-library message.
pub fn render(view: &CatalogView<'_>) -> String {
    if view.is_empty() {
        return format!("\n{}\n", EMPTY_LIBRARY);
    }
    render_sections(view)
}

/// Render one section per known type, in alphabetical order of the labels
pub fn render_sections(view: &CatalogView<'_>) -> String {
    let mut out = String::new();

    for file_type in FileType::alphabetical() {
        let docs = view.bucket(file_type);
        let header = section_header(file_type, docs.len());

        out.push('\n');
        out.push_str(&header);
        out.push('\n');
        for doc in docs {
            write_entry(&mut out, doc);
        }
        out.push_str(&"-".repeat(header.chars().count()));
        out.push('\n');
    }

    out
}

/// Render the grouped view as pretty JSON keyed by type label
pub fn render_json(view: &CatalogView<'_>) -> serde_json::Result<String> {
    let by_label: BTreeMap<&str, &[&Document]> =
        view.buckets().map(|(t, docs)| (t.as_str(), docs)).collect();
    serde_json::to_string_pretty(&by_label)
}

fn section_header(file_type: FileType, count: usize) -> String {
    let label = file_type.as_str().to_uppercase();
    match count {
        0 => format!("--- File Type: {} (No Documents) ---", label),
        1 => format!("--- File Type: {} (1 Document) ---", label),
        n => format!("--- File Type: {} ({} Documents) ---", label, n),
    }
}

fn write_entry(out: &mut String, doc: &Document) {
    // Writing to a String never fails
    let _ = writeln!(out, "  ID: {}", doc.id);
    let _ = writeln!(out, "  Title: {}", doc.title);
    let _ = writeln!(out, "    Author: {}", doc.author);
    let _ = writeln!(out, "    Year: {}", doc.year);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::catalog::group_by_type;

    #[test]
    fn test_empty_library_message() {
        let docs: Vec<Document> = Vec::new();
        let view = group_by_type(&docs);

        let text = render(&view);
        assert_eq!(text.trim(), EMPTY_LIBRARY);
        assert!(!text.contains("File Type"));
    }

    #[test]
    fn test_sections_in_alphabetical_order() {
        let docs = vec![
            Document::new(1, "Guia", "Ana", 2021, "pdf", ""),
            Document::new(2, "Cognitiva", "Lucas", 2016, "azw", ""),
        ];
        let view = group_by_type(&docs);
        let text = render(&view);

        let headers: Vec<_> = text
            .lines()
            .filter(|l| l.starts_with("--- File Type"))
            .collect();
        assert_eq!(
            headers,
            [
                "--- File Type: AZW (1 Document) ---",
                "--- File Type: DOCX (No Documents) ---",
                "--- File Type: EPUB (No Documents) ---",
                "--- File Type: MOBI (No Documents) ---",
                "--- File Type: PDF (1 Document) ---",
                "--- File Type: TXT (No Documents) ---",
            ]
        );
    }

    #[test]
    fn test_entry_lines_and_separator() {
        let docs = vec![
            Document::new(4, "B", "Bia", 2020, "txt", ""),
            Document::new(5, "A", "Ana", 2020, "txt", ""),
        ];
        let view = group_by_type(&docs);
        let text = render(&view);

        let section: Vec<_> = text
            .lines()
            .skip_while(|l| !l.starts_with("--- File Type: TXT"))
            .collect();
        assert_eq!(
            section,
            [
                "--- File Type: TXT (2 Documents) ---",
                "  ID: 5",
                "  Title: A",
                "    Author: Ana",
                "    Year: 2020",
                "  ID: 4",
                "  Title: B",
                "    Author: Bia",
                "    Year: 2020",
                "------------------------------------",
            ]
        );
    }

    #[test]
    fn test_render_sections_ignores_empty_special_case() {
        let docs: Vec<Document> = Vec::new();
        let view = group_by_type(&docs);

        let text = render_sections(&view);
        assert_eq!(text.matches("(No Documents)").count(), 6);
    }

    #[test]
    fn test_render_json_keys() {
        let docs = vec![Document::new(1, "Guia", "Ana", 2021, "epub", "/x.epub")];
        let view = group_by_type(&docs);

        let json: serde_json::Value = serde_json::from_str(&render_json(&view).unwrap()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["azw", "docx", "epub", "mobi", "pdf", "txt"]);
        assert_eq!(json["epub"][0]["title"], "Guia");
    }
}
