//! Application module
//!
//! Contains the checklist event loop and key dispatch.
//!
//! # Module Structure
//! - `state` - View state types (AppState, Cursor)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Cursor};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::selection::SelectionStore;
use crate::storage::KeyValueStore;
use crate::ui::{RenderContext, UiRenderer};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// How long the loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal bell, the checklist's audible feedback
const BELL: &[u8] = b"\x07";

/// Main application struct
pub struct App<S: KeyValueStore> {
    store: SelectionStore<S>,
    state: AppState,
    keybindings: KeybindingContext,
    ui_renderer: UiRenderer,
    /// Set by a toggle while unmuted; consumed by the event loop
    bell_pending: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new application instance around a loaded store
    pub fn new(store: SelectionStore<S>) -> Self {
        info!("Creating new App instance");
        let keybindings = KeybindingContext::new();
        let ui_renderer = UiRenderer::new(&keybindings);

        let mut state = AppState::default();
        state.cursor.clamp(store.catalog());

        Self {
            store,
            state,
            keybindings,
            ui_renderer,
            bell_pending: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &SelectionStore<S> {
        &self.store
    }

    /// Main loop: draw, wait for a key, dispatch, repeat until quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            terminal.draw(|f| {
                let ctx = RenderContext {
                    catalog: self.store.catalog(),
                    selections: self.store.state(),
                    muted: self.store.is_muted(),
                    state: &self.state,
                    keybindings: &self.keybindings,
                };
                self.ui_renderer.render(f, &ctx);
            })?;

            if self.take_bell() {
                let mut out = std::io::stdout();
                out.write_all(BELL)?;
                out.flush()?;
            }

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    self.handle_key_event(key_event);
                }
            }
        }

        info!("Exiting main application loop");
        Ok(())
    }

    /// Translate a key press into an action; returns whether anything matched
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Only presses; some terminals also report releases
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let Some(action) = self.keybindings.action_for(&key_event) else {
            return false;
        };

        // While help is open, only closing it (or quitting) does anything
        if self.state.help_visible {
            match action {
                KeyAction::Help => self.state.help_visible = false,
                KeyAction::Quit if key_event.code == crossterm::event::KeyCode::Esc => {
                    self.state.help_visible = false;
                }
                KeyAction::Quit => self.state.should_quit = true,
                _ => {}
            }
            return true;
        }

        self.handle_action(action);
        true
    }

    /// Apply one action to the store and view state
    pub fn handle_action(&mut self, action: KeyAction) {
        debug!("Handling action {:?}", action);
        let catalog = self.store.catalog();

        match action {
            KeyAction::NavigateUp => self.state.cursor.up(catalog),
            KeyAction::NavigateDown => self.state.cursor.down(catalog),
            KeyAction::NavigateLeft => self.state.cursor.left(catalog),
            KeyAction::NavigateRight => self.state.cursor.right(catalog),
            KeyAction::Home => self.state.cursor.first_in_section(),
            KeyAction::End => self.state.cursor.last_in_section(catalog),
            KeyAction::Toggle => self.toggle_at_cursor(),
            KeyAction::ToggleMute => {
                let muted = self.store.toggle_muted();
                self.state
                    .set_status(if muted { "Sound muted" } else { "Sound on" });
            }
            KeyAction::ResetGreen => {
                self.store.reset_green();
                self.state.set_status("Green selections cleared");
            }
            KeyAction::ResetBlue => {
                self.store.reset_blue();
                self.state.set_status("Blue selections cleared");
            }
            KeyAction::ResetAll => {
                self.store.reset_all();
                self.state.set_status("All selections cleared");
            }
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Quit => self.state.should_quit = true,
        }
    }

    fn toggle_at_cursor(&mut self) {
        let Some((section, option)) = self.state.cursor.resolve(self.store.catalog()) else {
            return;
        };
        let (name, value, label) = (
            section.name.clone(),
            option.value.clone(),
            option.label.clone(),
        );

        let selected = self.store.toggle(&name, &value);
        let verb = if selected { "Checked" } else { "Unchecked" };
        self.state.set_status(format!("{} {} {}", verb, name, label));

        if !self.store.is_muted() {
            self.bell_pending = true;
        }
    }

    /// Whether a bell is owed; clears the request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}
