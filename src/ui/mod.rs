//! User interface rendering module
//!
//! - `header` - title bar, status line and navigation bar
//! - `checklist` - section blocks with their checkboxes

mod checklist;
mod header;

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::selection::SelectionState;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Everything a frame needs to draw
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub selections: &'a SelectionState,
    pub muted: bool,
    pub state: &'a AppState,
    pub keybindings: &'a KeybindingContext,
}

/// UI renderer for the application
pub struct UiRenderer {
    help: HelpOverlay,
}

impl UiRenderer {
    pub fn new(keybindings: &KeybindingContext) -> Self {
        Self {
            help: HelpOverlay::new(keybindings),
        }
    }

    /// Render the complete UI
    pub fn render(&self, f: &mut Frame, ctx: &RenderContext<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::STATUS_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        header::render_header(f, chunks[0], ctx);
        checklist::render_sections(f, chunks[1], ctx);
        header::render_status(f, chunks[2], &ctx.state.status_message);
        header::render_nav_bar(f, chunks[3], ctx.keybindings, ctx.muted);

        // Help overlay draws on top of everything
        if ctx.state.help_visible {
            self.help.render(f, f.area());
        }
    }
}
