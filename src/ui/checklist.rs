//! Section blocks with their checkboxes
//!
//! Each section is a bordered block titled with the section name. Its
//! options are laid out as `[x] $50` cells, packed left to right and wrapped
//! onto as many rows as the width needs.

use std::ops::Range;

use super::RenderContext;
use crate::catalog::{PriceOption, Section};
use crate::theme::{Styles, Theme, UiConstants, UiText};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one `[x] label` cell
fn cell_width(option: &PriceOption) -> u16 {
    let checkbox = UiText::CHECKED.len() as u16 + 1;
    checkbox + Span::raw(option.label.as_str()).width() as u16
}

/// Pack cells of `widths` into rows no wider than `inner_width`
///
/// Every row holds at least one cell, so an over-wide cell gets a row to
/// itself rather than being dropped.
fn option_rows(widths: &[u16], inner_width: u16) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used: u16 = 0;

    for (i, &w) in widths.iter().enumerate() {
        if i > start && used + UiConstants::CELL_GAP + w > inner_width {
            rows.push(start..i);
            start = i;
            used = 0;
        }
        used = if i == start {
            w
        } else {
            used + UiConstants::CELL_GAP + w
        };
    }
    if start < widths.len() {
        rows.push(start..widths.len());
    }
    rows
}

/// Rows a section block needs at `width`, borders included
fn section_height(section: &Section, width: u16) -> u16 {
    let widths: Vec<u16> = section.options.iter().map(cell_width).collect();
    let rows = u16::try_from(option_rows(&widths, width.saturating_sub(2)).len()).unwrap_or(u16::MAX);
    rows.max(1).saturating_add(2)
}

/// First section to draw so that `cursor` is on screen
fn first_visible_section(heights: &[u16], cursor: usize, available: u16) -> usize {
    let cursor = cursor.min(heights.len().saturating_sub(1));
    let mut first = 0;
    // Summed as usize; many tall sections overflow u16
    let mut total: usize = heights.iter().take(cursor + 1).map(|&h| usize::from(h)).sum();
    while first < cursor && total > usize::from(available) {
        total -= usize::from(heights[first]);
        first += 1;
    }
    first
}

pub fn render_sections(f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let sections = ctx.catalog.sections();
    let heights: Vec<u16> = sections
        .iter()
        .map(|s| section_height(s, area.width))
        .collect();

    let cursor = ctx.state.cursor;
    let first = first_visible_section(&heights, cursor.section, area.height);

    let mut y = area.y;
    for (index, section) in sections.iter().enumerate().skip(first) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: heights[index].min(remaining),
        };
        let focused = (index == cursor.section).then_some(cursor.option);
        render_section(f, rect, section, ctx, focused);
        y += rect.height;
    }
}

fn render_section(
    f: &mut Frame,
    area: Rect,
    section: &Section,
    ctx: &RenderContext<'_>,
    focused_option: Option<usize>,
) {
    let border = if focused_option.is_some() {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", section.name),
            Theme::section_title_style(section.tint),
        ));

    let widths: Vec<u16> = section.options.iter().map(cell_width).collect();
    let rows = option_rows(&widths, area.width.saturating_sub(2));
    let selected = ctx.selections.selected_in(&section.name);

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for i in row.clone() {
                if i > row.start {
                    spans.push(Span::raw(" ".repeat(UiConstants::CELL_GAP as usize)));
                }
                let option = &section.options[i];
                let checked = selected.is_some_and(|set| set.contains(&option.value));
                spans.extend(option_spans(option, checked, focused_option == Some(i)));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn option_spans(option: &PriceOption, checked: bool, focused: bool) -> [Span<'_>; 2] {
    let mark = if checked {
        UiText::CHECKED
    } else {
        UiText::UNCHECKED
    };

    if focused {
        return [
            Span::styled(format!("{} ", mark), Styles::cursor()),
            Span::styled(option.label.as_str(), Styles::cursor()),
        ];
    }

    [
        Span::styled(format!("{} ", mark), Theme::checkbox_style(option, checked)),
        Span::styled(option.label.as_str(), Theme::option_label_style(option)),
    ]
}
