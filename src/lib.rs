//! Tickbox library
//!
//! A price checklist whose selections persist between sessions. The core is
//! [`SelectionStore`]: per-section sets of selected option values plus a
//! mute flag, flushed to a [`KeyValueStore`] after every change. The rest of
//! the crate is the terminal front end and command line around it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod selection;
pub mod storage;
pub mod summary;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, Classification, PriceOption, Section, SectionTint};
pub use config::AppConfig;
pub use error::TickboxError;
pub use selection::{SelectionState, SelectionStore};
pub use storage::{DirStore, KeyValueStore, MemoryStore};
