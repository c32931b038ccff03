//! Configuration for biblio.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BIBLIO_DOCUMENTS_ROOT, BIBLIO_CONFIRM_TOKEN, BIBLIO_LOG_LEVEL)
//! 2. Config file (.biblio/config.yaml, then ~/.biblio/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .biblio/config.yaml
//! - Falls back to the file under the home directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_DOCUMENTS_ROOT: &str = "path/to/documents";
const DEFAULT_CONFIRM_TOKEN: &str = "y";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Directory prefix for placeholder file paths
    pub documents_root: Option<String>,
    /// Answer that confirms a removal
    pub confirm_token: Option<String>,
    /// Load the sample documents when the shell starts
    pub seed_sample: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Settings consumed by the command operations and the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub documents_root: String,
    pub confirm_token: String,
    pub seed_sample: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            documents_root: DEFAULT_DOCUMENTS_ROOT.to_string(),
            confirm_token: DEFAULT_CONFIRM_TOKEN.to_string(),
            seed_sample: true,
        }
    }
}

impl CatalogSettings {
    /// Case-insensitive comparison of an answer against the confirm token
    /// A blank answer never confirms, whatever the token.
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim();
        !answer.is_empty() && answer.to_lowercase() == self.confirm_token.trim().to_lowercase()
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: CatalogSettings,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".biblio").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".biblio").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge environment, file and defaults
fn resolve(file: Option<&ConfigFile>, env: impl Fn(&str) -> Option<String>) -> (CatalogSettings, String) {
    let defaults = CatalogSettings::default();
    let catalog = file.map(|f| f.catalog.clone()).unwrap_or_default();

    let settings = CatalogSettings {
        documents_root: env("BIBLIO_DOCUMENTS_ROOT")
            .or(catalog.documents_root)
            .unwrap_or(defaults.documents_root),
        confirm_token: env("BIBLIO_CONFIRM_TOKEN")
            .or(catalog.confirm_token)
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .unwrap_or(defaults.confirm_token),
        seed_sample: catalog.seed_sample.unwrap_or(defaults.seed_sample),
    };

    let log_level = env("BIBLIO_LOG_LEVEL")
        .or_else(|| file.and_then(|f| f.logging.as_ref()).and_then(|l| l.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    (settings, log_level)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let parsed = config_file.as_deref().map(load_config_file).transpose()?;

    let (catalog, log_level) = resolve(parsed.as_ref(), |key| std::env::var(key).ok());

    Ok(ResolvedConfig {
        catalog,
        log_level,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
