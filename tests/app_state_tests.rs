//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Key dispatch to store operations
//! - Bell requests and the mute flag
//! - Help overlay and quit handling
//! - Drawing the checklist on a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use tickbox::app::{App, AppState, Cursor};
use tickbox::components::keybindings::KeyAction;
use tickbox::ui::{RenderContext, UiRenderer};
use tickbox::{Catalog, MemoryStore, SelectionStore};

fn app() -> App<MemoryStore> {
    App::new(SelectionStore::load(Catalog::builtin(), MemoryStore::new()))
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_cursor_at_origin() {
    let state = AppState::default();
    assert_eq!(state.cursor, Cursor::default());
}

#[test]
fn test_app_state_default_has_hint_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("Space"));
}

#[test]
fn test_app_state_default_flags() {
    let state = AppState::default();
    assert!(!state.help_visible);
    assert!(!state.should_quit);
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn test_space_toggles_focused_option() {
    let mut app = app();
    assert!(app.handle_key_event(press(KeyCode::Char(' '))));

    assert!(app.store().is_selected("AGC", "50"));
    assert_eq!(app.state().status_message, "Checked AGC $50");
}

#[test]
fn test_toggle_twice_unchecks() {
    let mut app = app();
    app.handle_action(KeyAction::Toggle);
    app.handle_action(KeyAction::Toggle);

    assert!(app.store().state().is_empty());
    assert_eq!(app.state().status_message, "Unchecked AGC $50");
}

#[test]
fn test_navigation_then_toggle() {
    let mut app = app();
    app.handle_action(KeyAction::NavigateDown);
    app.handle_action(KeyAction::NavigateDown);
    app.handle_action(KeyAction::Toggle);

    assert!(app.store().is_selected("Pepsi", "70"));
}

#[test]
fn test_release_events_are_ignored() {
    let mut app = app();
    let release = KeyEvent {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(!app.handle_key_event(release));
    assert!(app.store().state().is_empty());
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut app = app();
    assert!(!app.handle_key_event(press(KeyCode::Char('z'))));
}

// =============================================================================
// Bell and Mute
// =============================================================================

#[test]
fn test_toggle_requests_bell_once() {
    let mut app = app();
    app.handle_action(KeyAction::Toggle);
    assert!(app.take_bell());
    assert!(!app.take_bell());
}

#[test]
fn test_muted_toggle_is_silent() {
    let mut app = app();
    app.handle_action(KeyAction::ToggleMute);
    assert!(app.store().is_muted());
    assert_eq!(app.state().status_message, "Sound muted");

    app.handle_action(KeyAction::Toggle);
    assert!(app.store().is_selected("AGC", "50"));
    assert!(!app.take_bell());
}

#[test]
fn test_unmute_restores_bell() {
    let mut app = app();
    app.handle_action(KeyAction::ToggleMute);
    app.handle_action(KeyAction::ToggleMute);
    assert_eq!(app.state().status_message, "Sound on");

    app.handle_action(KeyAction::Toggle);
    assert!(app.take_bell());
}

// =============================================================================
// Resets
// =============================================================================

#[test]
fn test_reset_keys() {
    let mut app = app();
    // Pepsi $70 (blue) and Pepsi $40 (green)
    app.handle_action(KeyAction::NavigateDown);
    app.handle_action(KeyAction::NavigateDown);
    app.handle_action(KeyAction::Toggle);
    app.handle_action(KeyAction::NavigateRight);
    app.handle_action(KeyAction::Toggle);

    app.handle_key_event(press(KeyCode::Char('g')));
    assert!(app.store().is_selected("Pepsi", "70"));
    assert!(!app.store().is_selected("Pepsi", "40"));
    assert_eq!(app.state().status_message, "Green selections cleared");

    app.handle_action(KeyAction::Toggle);
    app.handle_key_event(press(KeyCode::Char('b')));
    assert!(!app.store().is_selected("Pepsi", "70"));
    assert!(app.store().is_selected("Pepsi", "40"));

    app.handle_key_event(press(KeyCode::Char('r')));
    assert!(app.store().state().is_empty());
    assert_eq!(app.state().status_message, "All selections cleared");
}

// =============================================================================
// Help and Quit
// =============================================================================

#[test]
fn test_help_blocks_other_actions() {
    let mut app = app();
    app.handle_key_event(press(KeyCode::Char('?')));
    assert!(app.state().help_visible);

    app.handle_key_event(press(KeyCode::Char(' ')));
    assert!(app.store().state().is_empty());
    assert!(app.state().help_visible);
}

#[test]
fn test_esc_closes_help_without_quitting() {
    let mut app = app();
    app.handle_action(KeyAction::Help);
    app.handle_key_event(press(KeyCode::Esc));

    assert!(!app.state().help_visible);
    assert!(!app.state().should_quit);
}

#[test]
fn test_q_quits_even_with_help_open() {
    let mut app = app();
    app.handle_action(KeyAction::Help);
    app.handle_key_event(press(KeyCode::Char('q')));
    assert!(app.state().should_quit);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = app();
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.state().should_quit);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_shows_sections_and_marks() {
    let mut app = app();
    app.handle_action(KeyAction::Toggle);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let keybindings = tickbox::components::keybindings::KeybindingContext::new();
    let renderer = UiRenderer::new(&keybindings);

    terminal
        .draw(|f| {
            let ctx = RenderContext {
                catalog: app.store().catalog(),
                selections: app.store().state(),
                muted: app.store().is_muted(),
                state: app.state(),
                keybindings: &keybindings,
            };
            renderer.render(f, &ctx);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("AGC"));
    assert!(text.contains("Pepsi"));
    assert!(text.contains("[x] $50"));
    assert!(text.contains("1 selected"));
}
