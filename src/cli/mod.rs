//! Command-line interface for biblio.
//!
//! Provides the interactive shell, a demonstration listing over the
//! built-in sample catalog, and a view of the resolved configuration.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::core::DocumentStore;
use crate::domain::Document;
use crate::library::{group_by_type, render, render_json, render_sections, sample, CatalogView};

pub mod shell;

pub use shell::Shell;

/// biblio - digital library catalog manager
#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Shell {
        /// Start with an empty library instead of the sample documents
        #[arg(long)]
        empty: bool,
    },

    /// List the built-in demonstration catalog, then an empty one
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Listing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections
    Text,

    /// JSON keyed by file type
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Shell { empty: false }) {
            Commands::Shell { empty } => run_shell(empty),
            Commands::Demo { format } => run_demo(format),
            Commands::Config => show_config(),
        }
    }
}

/// Run the interactive menu on stdin/stdout
fn run_shell(empty: bool) -> Result<()> {
    let settings = config::config()?.catalog.clone();

    let mut store = DocumentStore::new();
    if settings.seed_sample && !empty {
        sample::seed(&mut store, sample::STARTUP);
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(store, settings, stdin.lock(), io::stdout());
    shell.run()
}

/// Print the demo catalog and an empty catalog
fn run_demo(format: OutputFormat) -> Result<()> {
    let documents = sample::demo_documents();

    println!("Organizing and listing {} digital documents...", documents.len());
    print!("{}", listing(&documents, format, render)?);

    println!("\n{}", "=".repeat(50));
    println!("Listing an empty collection:");
    println!("{}", "=".repeat(50));
    // Every type gets its own "no documents" section here
    print!("{}", listing(&[], format, render_sections)?);
    Ok(())
}

/// Group and format documents; `text` picks the text renderer
fn listing(
    documents: &[Document],
    format: OutputFormat,
    text: fn(&CatalogView<'_>) -> String,
) -> Result<String> {
    let view = group_by_type(documents);
    match format {
        OutputFormat::Text => Ok(text(&view)),
        OutputFormat::Json => {
            let json = render_json(&view).context("Failed to serialize catalog")?;
            Ok(format!("{}\n", json))
        }
    }
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("biblio configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Catalog:");
    println!("  Documents root: {}", cfg.catalog.documents_root);
    println!("  Confirm token:  {}", cfg.catalog.confirm_token);
    println!("  Seed sample:    {}", cfg.catalog.seed_sample);
    println!();
    println!("Logging:");
    println!("  Default level:  {}", cfg.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_shell() {
        let cli = Cli::try_parse_from(["biblio"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_demo_format_flag() {
        let cli = Cli::try_parse_from(["biblio", "demo", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Demo {
                format: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn test_demo_empty_half_lists_every_type() {
        let text = listing(&[], OutputFormat::Text, render_sections).unwrap();

        assert_eq!(text.matches("(No Documents)").count(), 6);
        assert!(!text.contains(crate::library::EMPTY_LIBRARY));
    }

    #[test]
    fn test_demo_full_half_uses_listing_renderer() {
        let documents = sample::demo_documents();
        let text = listing(&documents, OutputFormat::Text, render).unwrap();
        assert!(text.contains("--- File Type: PDF (14 Documents) ---"));

        let json = listing(&[], OutputFormat::Json, render_sections).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_shell_empty_flag() {
        let cli = Cli::try_parse_from(["biblio", "shell", "--empty"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Shell { empty: true })));
    }
}
