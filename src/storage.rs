//! Durable key-value storage
//!
//! The selection store persists through a [`KeyValueStore`], a small
//! get/set interface over string values. Two implementations ship:
//!
//! - [`DirStore`] keeps one `<key>.json` file per key in a state directory.
//! - [`MemoryStore`] keeps everything in a map (tests, `--ephemeral` runs).
//!
//! Values are JSON documents encoded as strings; decoding them is the
//! caller's job (see `selection`).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TickboxError};

/// Storage key holding the mute flag (JSON boolean)
pub const MUTED_KEY: &str = "muted";

/// Storage key holding the selections (JSON object of string arrays)
pub const SELECTED_VALUES_KEY: &str = "selectedValues";

/// Get/set access to durable string values
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key
///
/// Writes land in a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Use `dir` as the state directory; it is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for DirStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{}' at {:?}", key, path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

/// Keys become file names, so keep them to a plain identifier alphabet
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(TickboxError::storage(format!("invalid storage key '{}'", key)))
    }
}
