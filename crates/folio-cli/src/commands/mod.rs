pub mod carousel;
pub mod check;
pub mod config;
pub mod content;
pub mod sections;

use std::path::Path;

use anyhow::{Context, Result};
use folio_core::config::FolioConfig;

/// Load `path` if given, otherwise the built-in config.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(FolioConfig::default()),
    }
}
