//! Keybinding registry
//!
//! Maps key presses to checklist actions and supplies the nav bar hints and
//! help overlay content from the same table, so the three never disagree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Home,
    End,
    Toggle,
    ToggleMute,
    ResetGreen,
    ResetBlue,
    ResetAll,
    Help,
    Quit,
}

/// Grouping used by the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingGroup {
    Navigation,
    Selection,
    General,
}

impl BindingGroup {
    pub fn title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Selection => "Selection",
            Self::General => "General",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        // Shift is implied by the character for bindings like '?'
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        // Letters match regardless of case (Caps Lock, Shift+letter)
        let code = match event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            code => code,
        };
        self.key == code && self.modifiers == modifiers
    }
}

/// Nav bar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// A titled block of the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Keybinding registry
pub struct KeybindingContext {
    bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        use KeyAction as A;

        let bindings = vec![
            Keybinding::new(KeyCode::Up, A::NavigateUp, "Up", "Previous section"),
            Keybinding::new(KeyCode::Char('k'), A::NavigateUp, "K", "Previous section"),
            Keybinding::new(KeyCode::Down, A::NavigateDown, "Down", "Next section"),
            Keybinding::new(KeyCode::Char('j'), A::NavigateDown, "J", "Next section"),
            Keybinding::new(KeyCode::Left, A::NavigateLeft, "Left", "Previous option"),
            Keybinding::new(KeyCode::Char('h'), A::NavigateLeft, "H", "Previous option"),
            Keybinding::new(KeyCode::Right, A::NavigateRight, "Right", "Next option"),
            Keybinding::new(KeyCode::Char('l'), A::NavigateRight, "L", "Next option"),
            Keybinding::new(KeyCode::Tab, A::NavigateRight, "Tab", "Next option"),
            Keybinding::new(KeyCode::Home, A::Home, "Home", "First option in section"),
            Keybinding::new(KeyCode::End, A::End, "End", "Last option in section"),
            Keybinding::new(KeyCode::Char(' '), A::Toggle, "Space", "Toggle"),
            Keybinding::new(KeyCode::Enter, A::Toggle, "Enter", "Toggle"),
            Keybinding::new(KeyCode::Char('g'), A::ResetGreen, "G", "Reset green"),
            Keybinding::new(KeyCode::Char('b'), A::ResetBlue, "B", "Reset blue"),
            Keybinding::new(KeyCode::Char('r'), A::ResetAll, "R", "Reset all"),
            Keybinding::new(KeyCode::Char('m'), A::ToggleMute, "M", "Mute / unmute"),
            Keybinding::new(KeyCode::Char('?'), A::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), A::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, A::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                A::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        Self { bindings }
    }

    /// Action bound to a key event, if any
    pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, muted: bool) -> Vec<NavBarItem> {
        let mut items = vec![NavBarItem {
            key_display: "Arrows".to_string(),
            action_label: "Move".to_string(),
        }];

        let priority = [
            KeyAction::Toggle,
            KeyAction::ResetGreen,
            KeyAction::ResetBlue,
            KeyAction::ResetAll,
            KeyAction::ToggleMute,
            KeyAction::Help,
            KeyAction::Quit,
        ];

        for action in priority {
            if let Some(binding) = self.bindings.iter().find(|b| b.action == action) {
                let action_label = match action {
                    KeyAction::ToggleMute if muted => "Unmute".to_string(),
                    KeyAction::ToggleMute => "Mute".to_string(),
                    _ => binding.description.clone(),
                };
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label,
                });
            }
        }

        items
    }

    /// Get full help content (for help overlay)
    pub fn get_help_content(&self) -> Vec<HelpSection> {
        [BindingGroup::Navigation, BindingGroup::Selection, BindingGroup::General]
            .into_iter()
            .map(|group| {
                let mut items: Vec<(String, String)> = Vec::new();
                for binding in self.bindings.iter().filter(|b| group_of(b.action) == group) {
                    // Alternate keys for the same action share one row
                    if let Some(row) = items.iter_mut().find(|(_, d)| *d == binding.description) {
                        row.0 = format!("{}/{}", row.0, binding.display);
                    } else {
                        items.push((binding.display.clone(), binding.description.clone()));
                    }
                }
                HelpSection {
                    title: group.title().to_string(),
                    items,
                }
            })
            .collect()
    }
}

fn group_of(action: KeyAction) -> BindingGroup {
    match action {
        KeyAction::NavigateUp
        | KeyAction::NavigateDown
        | KeyAction::NavigateLeft
        | KeyAction::NavigateRight
        | KeyAction::Home
        | KeyAction::End => BindingGroup::Navigation,
        KeyAction::Toggle | KeyAction::ResetGreen | KeyAction::ResetBlue | KeyAction::ResetAll => {
            BindingGroup::Selection
        }
        KeyAction::ToggleMute | KeyAction::Help | KeyAction::Quit => BindingGroup::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_lookup() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.action_for(&key(KeyCode::Char(' '))), Some(KeyAction::Toggle));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('g'))), Some(KeyAction::ResetGreen));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('b'))), Some(KeyAction::ResetBlue));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('r'))), Some(KeyAction::ResetAll));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('m'))), Some(KeyAction::ToggleMute));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.action_for(&event), Some(KeyAction::Help));
    }

    #[test]
    fn test_uppercase_letters_match() {
        let ctx = KeybindingContext::new();
        let caps = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let shifted = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);

        assert_eq!(ctx.action_for(&caps('G')), Some(KeyAction::ResetGreen));
        assert_eq!(ctx.action_for(&caps('B')), Some(KeyAction::ResetBlue));
        assert_eq!(ctx.action_for(&caps('R')), Some(KeyAction::ResetAll));
        assert_eq!(ctx.action_for(&shifted('M')), Some(KeyAction::ToggleMute));
        assert_eq!(ctx.action_for(&caps('Q')), Some(KeyAction::Quit));
        assert_eq!(ctx.action_for(&caps('J')), Some(KeyAction::NavigateDown));
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_nothing() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(&event), Some(KeyAction::Quit));
        assert_eq!(ctx.action_for(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_nav_items_follow_mute_state() {
        let ctx = KeybindingContext::new();
        let labels = |muted| {
            ctx.get_nav_items(muted)
                .into_iter()
                .map(|i| i.action_label)
                .collect::<Vec<_>>()
        };
        assert!(labels(false).contains(&"Mute".to_string()));
        assert!(labels(true).contains(&"Unmute".to_string()));
    }

    #[test]
    fn test_help_merges_alternate_keys() {
        let ctx = KeybindingContext::new();
        let help = ctx.get_help_content();
        assert_eq!(help.len(), 3);

        let nav = &help[0];
        assert_eq!(nav.title, "Navigation");
        assert!(nav.items.iter().any(|(k, d)| k == "Up/K" && d == "Previous section"));

        let selection = &help[1];
        assert!(selection.items.iter().any(|(k, _)| k == "Space/Enter"));
    }
}
