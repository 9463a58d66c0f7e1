//! Application state definitions
//!
//! View state of the checklist screen: the cursor, the status line, and
//! whether the help overlay is open. Selections themselves live in the
//! `SelectionStore`, not here.

use crate::catalog::{Catalog, PriceOption, Section};

/// Position of the focused checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index into the catalog's sections
    pub section: usize,
    /// Index into that section's options
    pub option: usize,
}

impl Cursor {
    /// Previous section, keeping the option column where possible
    pub fn up(&mut self, catalog: &Catalog) {
        if self.section > 0 {
            self.section -= 1;
            self.clamp(catalog);
        }
    }

    /// Next section, keeping the option column where possible
    pub fn down(&mut self, catalog: &Catalog) {
        if self.section + 1 < catalog.len() {
            self.section += 1;
            self.clamp(catalog);
        }
    }

    /// Previous option; wraps to the end of the previous section
    pub fn left(&mut self, catalog: &Catalog) {
        if self.option > 0 {
            self.option -= 1;
        } else if self.section > 0 {
            self.section -= 1;
            self.option = option_count(catalog, self.section).saturating_sub(1);
        }
    }

    /// Next option; wraps to the start of the next section
    pub fn right(&mut self, catalog: &Catalog) {
        if self.option + 1 < option_count(catalog, self.section) {
            self.option += 1;
        } else if self.section + 1 < catalog.len() {
            self.section += 1;
            self.option = 0;
        }
    }

    pub fn first_in_section(&mut self) {
        self.option = 0;
    }

    pub fn last_in_section(&mut self, catalog: &Catalog) {
        self.option = option_count(catalog, self.section).saturating_sub(1);
    }

    /// Pull the cursor back inside the catalog
    pub fn clamp(&mut self, catalog: &Catalog) {
        self.section = self.section.min(catalog.len().saturating_sub(1));
        self.option = self
            .option
            .min(option_count(catalog, self.section).saturating_sub(1));
    }

    /// Section and option under the cursor
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<(&'a Section, &'a PriceOption)> {
        let section = catalog.sections().get(self.section)?;
        let option = section.options.get(self.option)?;
        Some((section, option))
    }
}

fn option_count(catalog: &Catalog, section: usize) -> usize {
    catalog
        .sections()
        .get(section)
        .map_or(0, |s| s.options.len())
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Focused checkbox
    pub cursor: Cursor,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set when an exit was requested
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            status_message: "Space toggles, ? shows all keys".to_string(),
            help_visible: false,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
