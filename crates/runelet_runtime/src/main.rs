//! Runelet
//!
//! Headless inspector for loadout blueprints and item catalog pages.
//!
//! Run with: cargo run --bin runelet -- [FILE] [QUERY]
//!
//! FILE is a blueprint JSON document or a catalog page. Without FILE a
//! fresh blueprint is printed. QUERY searches the catalog page by name.

mod config;
mod inspect;

use config::RuntimeConfig;
use inspect::{blueprint_summary, catalog_summary, Document, InspectError};
use runelet_inventory::ItemCatalog;
use runelet_loadout::BlueprintEditor;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

/// Top level failures
#[derive(Debug, Error)]
enum RunError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Inspect { path: String, source: InspectError },
}

fn main() -> ExitCode {
    // Config first so its log level can seed the logger
    let config = RuntimeConfig::load();

    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    config.print_summary();

    match run(&config) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RuntimeConfig) -> Result<String, RunError> {
    let Some(input) = &config.input else {
        log::info!("No input file, showing a fresh blueprint");
        let editor = BlueprintEditor::new(config.editor.clone());
        return Ok(blueprint_summary(editor.blueprint()));
    };

    match load(input)? {
        Document::Blueprint(blueprint) => Ok(blueprint_summary(&blueprint)),
        Document::Catalog(page) => {
            let mut catalog = ItemCatalog::new();
            catalog.ingest(page);
            Ok(catalog_summary(
                &catalog,
                config.query.as_deref(),
                config.catalog.min_search_len,
            ))
        }
    }
}

fn load(path: &Path) -> Result<Document, RunError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: display.clone(),
        source,
    })?;
    Document::parse(&text).map_err(|source| RunError::Inspect {
        path: display,
        source,
    })
}
