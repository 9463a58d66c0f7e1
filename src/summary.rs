//! Plain-text views for the headless commands

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::selection::SelectionState;
use crate::theme::UiText;

/// One line per section: `AGC: [x] $50  [ ] $40 ...`, then the mute flag
pub fn checklist_text(catalog: &Catalog, selections: &SelectionState, muted: bool) -> String {
    let width = name_width(catalog);
    let mut out = String::new();

    for section in catalog.sections() {
        let cells: Vec<String> = section
            .options
            .iter()
            .map(|o| {
                let mark = if selections.is_selected(&section.name, &o.value) {
                    UiText::CHECKED
                } else {
                    UiText::UNCHECKED
                };
                format!("{} {}", mark, o.label)
            })
            .collect();
        let _ = writeln!(out, "{:<width$}  {}", section.name, cells.join("  "));
    }

    // Selections the catalog no longer describes are still shown
    for (name, values) in selections.iter() {
        let unknown: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|v| !catalog.contains(name, v))
            .collect();
        if !unknown.is_empty() {
            let _ = writeln!(out, "{:<width$}  (not in catalog) {}", name, unknown.join(", "));
        }
    }

    let _ = writeln!(
        out,
        "\n{} selected, {}",
        selections.selected_count(),
        if muted { "muted" } else { "sound on" }
    );
    out
}

/// Catalog listing: section headers and `label  value  class` rows
pub fn catalog_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    for section in catalog.sections() {
        match section.tint {
            Some(tint) => {
                let _ = writeln!(out, "{} ({})", section.name, tint);
            }
            None => {
                let _ = writeln!(out, "{}", section.name);
            }
        }
        for option in &section.options {
            let _ = writeln!(
                out,
                "  {:<8} {:<8} {}",
                option.label,
                option.value,
                option.classification()
            );
        }
    }
    out
}

fn name_width(catalog: &Catalog) -> usize {
    catalog
        .sections()
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_text_marks_selected() {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new();
        state.toggle("AGC", "50");

        let text = checklist_text(&catalog, &state, true);
        assert!(text.contains("AGC       [x] $50  [ ] $40"));
        assert!(text.contains("1 selected, muted"));
    }

    #[test]
    fn test_checklist_text_reports_unknown_values() {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new();
        state.toggle("AGC", "999");
        state.toggle("Ghost", "1");

        let text = checklist_text(&catalog, &state, false);
        assert!(text.contains("(not in catalog) 999"));
        assert!(text.contains("Ghost"));
        assert!(text.contains("sound on"));
    }

    #[test]
    fn test_catalog_text() {
        let text = catalog_text(&Catalog::builtin());
        assert!(text.contains("Busy (red)"));
        assert!(text.contains("Pepsi (blue)"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("$70") && l.ends_with("blue")));
    }
}
