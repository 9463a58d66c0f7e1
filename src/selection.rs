//! Selection state and the store that owns it
//!
//! [`SelectionState`] maps a section name to the set of selected option
//! values. A section is only present while at least one of its values is
//! selected; every mutation prunes sets that became empty.
//!
//! [`SelectionStore`] wraps the state, the mute flag, the catalog, and a
//! [`KeyValueStore`]. Every mutation is flushed to storage in full before
//! it returns. Storage problems never reach the caller: unreadable values
//! load as defaults and failed writes are logged while the in-memory state
//! stays authoritative.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Classification};
use crate::storage::{KeyValueStore, MUTED_KEY, SELECTED_VALUES_KEY};

/// Selected option values per section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    sections: BTreeMap<String, BTreeSet<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, section: &str, value: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|set| set.contains(value))
    }

    /// Flip membership of `value`; returns whether it is now selected
    pub fn toggle(&mut self, section: &str, value: &str) -> bool {
        let set = self.sections.entry(section.to_string()).or_default();
        let selected = if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        };

        if set.is_empty() {
            self.sections.remove(section);
        }
        selected
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Remove the catalog's `class` values from every section
    ///
    /// Values of the other classification, and values the catalog does not
    /// know, are left alone. Returns how many values were removed.
    pub fn clear_classification(&mut self, catalog: &Catalog, class: Classification) -> usize {
        let mut removed = 0;
        for section in catalog.sections() {
            let Some(set) = self.sections.get_mut(&section.name) else {
                continue;
            };
            for value in section.values_of(class) {
                if set.remove(value) {
                    removed += 1;
                }
            }
            if set.is_empty() {
                self.sections.remove(&section.name);
            }
        }
        removed
    }

    /// Selected values of one section
    pub fn selected_in(&self, section: &str) -> Option<&BTreeSet<String>> {
        self.sections.get(section)
    }

    /// Iterate `(section, values)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of selected values across sections
    pub fn selected_count(&self) -> usize {
        self.sections.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Encode in the `selectedValues` storage format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode the `selectedValues` storage format
    ///
    /// Duplicate values collapse and empty arrays are dropped, so the result
    /// always satisfies the no-empty-section invariant.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut state: Self = serde_json::from_str(json)?;
        state.sections.retain(|_, set| !set.is_empty());
        Ok(state)
    }
}

/// Owner of the selection state and mute flag
#[derive(Debug)]
pub struct SelectionStore<S: KeyValueStore> {
    catalog: Catalog,
    state: SelectionState,
    muted: bool,
    storage: S,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Load both values from `storage`, defaulting whatever is missing or corrupt
    pub fn load(catalog: Catalog, storage: S) -> Self {
        let muted = load_muted(&storage);
        let state = load_selections(&storage);
        info!(
            "Loaded {} selections across {} sections (muted: {})",
            state.selected_count(),
            state.sections.len(),
            muted
        );

        Self {
            catalog,
            state,
            muted,
            storage,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_selected(&self, section: &str, value: &str) -> bool {
        self.state.is_selected(section, value)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_count()
    }

    /// Flip one option; returns whether it is now selected
    pub fn toggle(&mut self, section: &str, value: &str) -> bool {
        let selected = self.state.toggle(section, value);
        debug!("Toggled {}/{} -> {}", section, value, selected);
        self.save_selections();
        selected
    }

    pub fn reset_all(&mut self) {
        self.state.clear();
        info!("Reset all selections");
        self.save_selections();
    }

    /// Clear the options whose `is_blue` flag equals `is_blue`
    pub fn reset_by_classification(&mut self, is_blue: bool) {
        let class = Classification::from_is_blue(is_blue);
        let removed = self.state.clear_classification(&self.catalog, class);
        info!("Reset {} selections ({} removed)", class, removed);
        self.save_selections();
    }

    pub fn reset_green(&mut self) {
        self.reset_by_classification(false);
    }

    pub fn reset_blue(&mut self) {
        self.reset_by_classification(true);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        debug!("Muted set to {}", muted);
        self.save_muted();
    }

    /// Flip the mute flag; returns the new value
    pub fn toggle_muted(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    fn save_selections(&mut self) {
        match self.state.to_json() {
            Ok(json) => {
                if let Err(e) = self.storage.set_item(SELECTED_VALUES_KEY, &json) {
                    warn!("Failed to persist selections: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode selections: {}", e),
        }
    }

    fn save_muted(&mut self) {
        let json = if self.muted { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(MUTED_KEY, json) {
            warn!("Failed to persist mute flag: {}", e);
        }
    }
}

fn load_muted<S: KeyValueStore>(storage: &S) -> bool {
    match storage.get_item(MUTED_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
            debug!("Ignoring unreadable mute flag: {}", e);
            false
        }),
        Ok(None) => false,
        Err(e) => {
            debug!("Could not read mute flag: {}", e);
            false
        }
    }
}

fn load_selections<S: KeyValueStore>(storage: &S) -> SelectionState {
    match storage.get_item(SELECTED_VALUES_KEY) {
        Ok(Some(raw)) => SelectionState::from_json(&raw).unwrap_or_else(|e| {
            debug!("Ignoring unreadable selections: {}", e);
            SelectionState::default()
        }),
        Ok(None) => SelectionState::default(),
        Err(e) => {
            debug!("Could not read selections: {}", e);
            SelectionState::default()
        }
    }
}
