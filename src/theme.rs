//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles of the checklist.
//!
//! # Usage
//! ```rust
//! use tickbox::catalog::PriceOption;
//! use tickbox::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let label_style = Theme::option_label_style(&PriceOption::blue("$70", "70"));
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::{Classification, PriceOption, SectionTint};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Help popup background
    pub const BG_POPUP: Color = Color::Rgb(20, 20, 30);

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - status line
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Option Colors
    // -------------------------------------------------------------------------

    /// Highlighted ("blue") price options
    pub const OPTION_BLUE: Color = Color::LightBlue;

    /// Standard ("green") price options
    pub const OPTION_GREEN: Color = Color::Green;

    /// Non-price labels (Double, Half, Delete)
    pub const OPTION_NEUTRAL: Color = Color::Gray;

    // -------------------------------------------------------------------------
    // Section Tints
    // -------------------------------------------------------------------------

    pub const TINT_RED: Color = Color::Red;

    pub const TINT_BLUE: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Border of the section holding the cursor
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Border of other sections
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Cursor highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Cursor text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Muted indicator
    pub const MUTED: Color = Color::Red;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Popup background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_POPUP)
    }

    /// Checkbox under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Status line
    pub fn status() -> Style {
        Style::default().fg(Colors::SECONDARY)
    }

    /// Navigation hint key
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint label
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Color for a classification
    pub fn classification_color(class: Classification) -> Color {
        match class {
            Classification::Blue => Colors::OPTION_BLUE,
            Classification::Green => Colors::OPTION_GREEN,
        }
    }

    /// Label style: price labels by classification, other labels neutral
    pub fn option_label_style(option: &PriceOption) -> Style {
        if option.is_price() {
            Style::default().fg(Self::classification_color(option.classification()))
        } else {
            Style::default().fg(Colors::OPTION_NEUTRAL)
        }
    }

    /// Checkbox glyph style; always follows the classification
    pub fn checkbox_style(option: &PriceOption, checked: bool) -> Style {
        let style = Style::default().fg(Self::classification_color(option.classification()));
        if checked {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Section heading style
    pub fn section_title_style(tint: Option<SectionTint>) -> Style {
        let color = match tint {
            Some(SectionTint::Red) => Colors::TINT_RED,
            Some(SectionTint::Blue) => Colors::TINT_BLUE,
            None => Colors::FG_PRIMARY,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Mute indicator style
    pub fn mute_style(muted: bool) -> Style {
        if muted {
            Style::default().fg(Colors::MUTED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::OPTION_GREEN)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Header height (title row inside a border)
    pub const HEADER_HEIGHT: u16 = 3;

    /// Status line height
    pub const STATUS_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Blank columns between checkboxes
    pub const CELL_GAP: u16 = 2;

    /// Help popup size limits
    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_MIN_WIDTH: u16 = 44;
    pub const HELP_MAX_WIDTH: u16 = 72;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    /// Checklist title
    pub const TITLE: &'static str = "AGC";

    pub const CHECKED: &'static str = "[x]";
    pub const UNCHECKED: &'static str = "[ ]";

    pub const MUTED: &'static str = "Muted";
    pub const SOUND_ON: &'static str = "Sound on";

    pub const HELP_FOOTER: &'static str = "Press ? or Esc to close";
}
