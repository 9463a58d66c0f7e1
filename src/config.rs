//! Runtime configuration
//!
//! Resolves where state lives, which catalog to use, and where TUI logs go,
//! from command line flags and environment variables.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::error::TickboxError;
use crate::selection::SelectionStore;
use crate::storage::{DirStore, KeyValueStore, MemoryStore};

/// Name of the directory created under the platform data dir
pub const APP_DIR_NAME: &str = "tickbox";

/// Log file written in TUI mode
pub const LOG_FILE_NAME: &str = "tickbox.log";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for state files and the TUI log
    pub state_dir: PathBuf,
    /// Catalog file; `None` selects the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Keep state in memory only
    pub ephemeral: bool,
}

impl AppConfig {
    /// Resolve settings from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let state_dir = match &cli.state_dir {
            Some(dir) => dir.clone(),
            None => default_state_dir()?,
        };

        Ok(Self {
            state_dir,
            catalog_path: cli.catalog.clone(),
            ephemeral: cli.ephemeral,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE_NAME)
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                debug!("Loading catalog from {:?}", path);
                Catalog::load_from_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    /// Storage backend for these settings
    pub fn open_storage(&self) -> Result<Box<dyn KeyValueStore>> {
        if self.ephemeral {
            debug!("Using in-memory storage");
            return Ok(Box::new(MemoryStore::new()));
        }

        ensure_not_a_file(&self.state_dir)?;
        let store = DirStore::new(&self.state_dir);
        debug!("Using state directory {:?}", store.dir());
        Ok(Box::new(store))
    }

    /// Catalog plus storage, loaded into a ready store
    pub fn open_store(&self) -> Result<SelectionStore<Box<dyn KeyValueStore>>> {
        let catalog = self.load_catalog()?;
        let storage = self.open_storage()?;
        Ok(SelectionStore::load(catalog, storage))
    }
}

/// `<platform data dir>/tickbox`
pub fn default_state_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| TickboxError::config("could not determine a data directory; pass --state-dir"))
        .context("Failed to resolve state directory")
}

fn ensure_not_a_file(dir: &Path) -> Result<()> {
    if dir.is_file() {
        let err = TickboxError::storage(format!("state directory {:?} is a file", dir));
        return Err(anyhow::Error::new(err).context("Unusable state directory"));
    }
    Ok(())
}
