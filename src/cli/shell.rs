//! Interactive menu over a document store.
//!
//! Reads answers line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the whole session can be scripted. Command
//! errors are reported and the menu continues; only I/O errors end the
//! session early. End of input exits cleanly.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::CatalogSettings;
use crate::core::commands::{self, AddRequest, CommandError, RemoveOutcome, RenameOutcome};
use crate::core::DocumentStore;
use crate::domain::FileType;
use crate::library::{group_by_type, render};

/// Menu-driven session owning the store for its lifetime
pub struct Shell<R, W> {
    store: DocumentStore,
    settings: CatalogSettings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: DocumentStore, settings: CatalogSettings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Consume the shell, returning the store and the output sink
    pub fn into_parts(self) -> (DocumentStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to the Digital Library Management System!")?;

        loop {
            self.say("\n--- Main Menu ---")?;
            self.say("1. Add Document")?;
            self.say("2. Rename Document Title")?;
            self.say("3. Remove Document")?;
            self.say("4. List All Documents")?;
            self.say("5. Exit")?;

            let Some(choice) = self.ask("Choose an option: ")? else {
                debug!("Input closed, leaving menu");
                break;
            };

            match choice.as_str() {
                "1" => self.add_document()?,
                "2" => self.rename_document()?,
                "3" => self.remove_document()?,
                "4" => self.list_documents()?,
                "5" => break,
                _ => self.say("Invalid option. Please choose a number from 1 to 5.")?,
            }
        }

        self.say("Leaving the system. Goodbye!")?;
        Ok(())
    }

    fn add_document(&mut self) -> Result<()> {
        self.say("\n--- Add New Document ---")?;

        let Some(title) = self.ask("Document title: ")? else {
            return Ok(());
        };
        if let Err(err) = commands::require_text("Title", &title) {
            return self.say(format!("{}. Operation cancelled.", err));
        }

        let Some(author) = self.ask("Document author: ")? else {
            return Ok(());
        };
        if let Err(err) = commands::require_text("Author", &author) {
            return self.say(format!("{}. Operation cancelled.", err));
        }

        let year = loop {
            let Some(answer) = self.ask("Publication year (YYYY): ")? else {
                return Ok(());
            };
            match commands::parse_year(&answer) {
                Ok(_) => break answer,
                Err(err) => self.say(err)?,
            }
        };

        let prompt = format!("File type ({}): ", FileType::labels());
        let file_type = loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(());
            };
            match commands::parse_file_type(&answer) {
                Ok(_) => break answer,
                Err(err) => self.say(err)?,
            }
        };

        let request = AddRequest {
            title: &title,
            author: &author,
            year: &year,
            file_type: &file_type,
        };
        let message = match commands::add(&mut self.store, &self.settings, request) {
            Ok(doc) => format!("\nDocument '{}' (ID: {}) added successfully!", doc.title, doc.id),
            Err(err) => err.to_string(),
        };
        self.say(message)
    }

    fn rename_document(&mut self) -> Result<()> {
        self.say("\n--- Rename Document Title ---")?;

        let Some(id_text) = self.select_document("Enter the ID of the document to rename: ")? else {
            return Ok(());
        };
        let (id, selected) = match commands::resolve(&self.store, &id_text) {
            Ok(doc) => (
                doc.id,
                format!("Selected document: '{}' (Author: {})", doc.title, doc.author),
            ),
            Err(err) => return self.say(err),
        };
        self.say(selected)?;

        let Some(new_title) = self.ask("Enter the new title for the document: ")? else {
            return Ok(());
        };
        let message = match commands::rename(&mut self.store, &id_text, &new_title) {
            Ok(RenameOutcome::Renamed { to, .. }) => {
                format!("Title of document ID {} updated to '{}' successfully!", id, to)
            }
            Ok(RenameOutcome::AlreadyCurrent) => {
                "New title is the same as the current title. No changes made.".to_string()
            }
            Err(err @ CommandError::Validation(_)) => format!("{}. Operation cancelled.", err),
            Err(err) => err.to_string(),
        };
        self.say(message)
    }

    fn remove_document(&mut self) -> Result<()> {
        self.say("\n--- Remove Document ---")?;

        let Some(id_text) = self.select_document("Enter the ID of the document to remove: ")? else {
            return Ok(());
        };
        let question = match commands::resolve(&self.store, &id_text) {
            Ok(doc) => format!(
                "Are you sure you want to remove '{}' (ID: {})? ({}/n): ",
                doc.title, doc.id, self.settings.confirm_token
            ),
            Err(err) => return self.say(err),
        };

        let Some(confirmation) = self.ask(&question)? else {
            return Ok(());
        };
        let message = match commands::remove(&mut self.store, &self.settings, &id_text, &confirmation) {
            Ok(RemoveOutcome::Removed(doc)) => {
                format!("Document ID {} ('{}') removed successfully!", doc.id, doc.title)
            }
            Ok(RemoveOutcome::Cancelled) => "Removal cancelled.".to_string(),
            Err(err) => err.to_string(),
        };
        self.say(message)
    }

    fn list_documents(&mut self) -> Result<()> {
        self.say("\n--- Listing Documents ---")?;
        let text = render(&group_by_type(self.store.all()));
        write!(self.output, "{}", text).context("Failed to write listing")?;
        Ok(())
    }

    /// List current documents and ask for an id until it parses.
    ///
    /// Returns `None` when the store is empty or input ended.
    fn select_document(&mut self, question: &str) -> Result<Option<String>> {
        if self.store.is_empty() {
            self.say(CommandError::EmptyStore)?;
            return Ok(None);
        }

        self.say("\nCurrent documents:")?;
        let listing: Vec<String> = self
            .store
            .all()
            .iter()
            .map(|doc| format!("  ID: {}, Title: '{}'", doc.id, doc.title))
            .collect();
        for line in listing {
            self.say(line)?;
        }

        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match commands::parse_id(&answer) {
                Ok(_) => return Ok(Some(answer)),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: DocumentStore, script: &str) -> (DocumentStore, String) {
        let mut shell = Shell::new(
            store,
            CatalogSettings::default(),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        shell.run().unwrap();
        let (store, output) = shell.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_on_end_of_input() {
        let (store, output) = run_script(DocumentStore::new(), "");
        assert!(store.is_empty());
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, output) = run_script(DocumentStore::new(), "9\n5\n");
        assert!(output.contains("Invalid option"));
    }

    #[test]
    fn test_rename_on_empty_store() {
        let (_, output) = run_script(DocumentStore::new(), "2\n5\n");
        assert!(output.contains("The library has no documents"));
    }
}
