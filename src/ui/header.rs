//! Header, status line and navigation bar

use super::RenderContext;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title on the left, selection count and mute state on the right
pub fn render_header(f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_inactive());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(UiText::TITLE, Styles::title())))
        .alignment(Alignment::Left);
    f.render_widget(title, inner);

    let count = ctx.selections.selected_count();
    let mute_label = if ctx.muted {
        UiText::MUTED
    } else {
        UiText::SOUND_ON
    };
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} selected", count), Styles::text()),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(mute_label, Theme::mute_style(ctx.muted)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(summary, inner);
}

pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", message),
        Styles::status(),
    )));
    f.render_widget(status, area);
}

/// Key hints along the bottom row
pub fn render_nav_bar(f: &mut Frame, area: Rect, keybindings: &KeybindingContext, muted: bool) {
    let mut spans = Vec::new();
    for item in keybindings.get_nav_items(muted) {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(format!("{} ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
