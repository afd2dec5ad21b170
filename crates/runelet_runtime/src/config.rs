//! Runtime Configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Command line: `runelet [FILE] [QUERY]`
//! 2. Environment variables: `RUNELET_LOG`, `RUNELET_TITLE`
//! 3. Config file: `RUNELET_CONFIG`, or `runelet.toml` in the working directory
//! 4. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! log_level = "debug"
//!
//! [editor]
//! blueprint_title = "My Blueprint"
//! copy_suffix = " - copy"
//!
//! [catalog]
//! min_search_len = 3
//! ```

use runelet_loadout::EditorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name
pub const CONFIG_FILE: &str = "runelet.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid TOML
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Catalog settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Shortest query that triggers a search
    pub min_search_len: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { min_search_len: 2 }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Default log filter
    pub log_level: String,
    /// Names used by new blueprints and loadouts
    pub editor: EditorConfig,
    /// Catalog settings
    pub catalog: CatalogConfig,
    /// Input file
    #[serde(skip)]
    pub input: Option<PathBuf>,
    /// Catalog search query
    #[serde(skip)]
    pub query: Option<String>,
    /// Config file the settings came from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            editor: EditorConfig::default(),
            catalog: CatalogConfig::default(),
            input: None,
            query: None,
            config_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os("RUNELET_CONFIG").map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::load_from_file(&path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::load_from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_args(std::env::args().skip(1));
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Override with environment variables
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(level) = var("RUNELET_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        if let Some(title) = var("RUNELET_TITLE").filter(|v| !v.trim().is_empty()) {
            self.editor.blueprint_title = title;
        }
    }

    /// Take the input file and search query from positional arguments
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| !arg.starts_with("--"));

        if let Some(input) = positional.next() {
            self.input = Some(PathBuf::from(input));
        }
        if let Some(query) = positional.next() {
            self.query = Some(query);
        }
    }

    /// Log the effective configuration
    pub fn print_summary(&self) {
        log::info!("Runtime Configuration:");
        log::info!("  Log level: {}", self.log_level);
        log::info!("  Blueprint title: {}", self.editor.blueprint_title);
        log::info!("  Min search length: {}", self.catalog.min_search_len);
        if let Some(path) = &self.config_path {
            log::info!("  Config: {}", path.display());
        }
        if let Some(input) = &self.input {
            log::info!("  Input: {}", input.display());
        }
    }
}
