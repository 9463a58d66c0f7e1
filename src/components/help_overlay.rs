//! Help overlay component
//!
//! Displays every keybinding in a centered popup.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles, UiConstants, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay from the registered keybindings
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content();
        Self {
            content: Self::build_content(&sections),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::OPTION_GREEN)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<16}", key), Styles::nav_key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "  Blue options are highlighted prices; everything else is green.",
            Styles::text_muted(),
        )]));

        lines
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        // Borders plus the footer line
        let height = u16::try_from(self.line_count())
            .unwrap_or(u16::MAX)
            .saturating_add(3);
        let area = centered_rect(parent, height);

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(UiText::HELP_FOOTER).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}

/// Popup rectangle clamped to the configured width limits and to `parent`
pub fn centered_rect(parent: Rect, height: u16) -> Rect {
    // u32 so wide terminals cannot overflow; the result is at most parent.width
    let pct_width = u32::from(parent.width) * u32::from(UiConstants::HELP_WIDTH_PCT) / 100;
    let width = u16::try_from(pct_width)
        .unwrap_or(parent.width)
        .clamp(UiConstants::HELP_MIN_WIDTH, UiConstants::HELP_MAX_WIDTH)
        .min(parent.width);
    let height = height.min(parent.height);

    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}
