//! Suggestion popup, anchored directly above the prompt box.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::widgets::popup;

use super::state::AutocompleteState;

/// Where the popup's suggestion rows landed, for pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupHit {
    /// The inner area; each row maps to one suggestion.
    pub rows: Rect,
    /// Index of the suggestion shown on the first row.
    pub first_index: usize,
}

/// Render the suggestion list above `input_area`. Returns the hit-test
/// layout, or `None` when nothing was drawn (closed or empty list).
pub fn render_popup(
    ac: &AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
    max_rows: u16,
) -> Option<PopupHit> {
    if !ac.is_open() || ac.results().is_empty() || max_rows == 0 {
        return None;
    }

    let total = ac.results().len();
    let rows = (total as u16).min(max_rows);

    // Keep the highlighted row in view by sliding the window.
    let cursor = ac.cursor();
    let first_index = if cursor >= rows as isize {
        (cursor - rows as isize + 1) as usize
    } else {
        0
    };

    let area = popup::above_anchor(input_area, input_area.width, rows + 2, 0);
    if area.height < 3 {
        return None;
    }
    popup::clear_area(frame, area);

    let visible = &ac.results()[first_index..(first_index + rows as usize).min(total)];
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .map(|(row, s)| {
            let highlighted = cursor == (first_index + row) as isize;
            let base = if highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(
                s.suggestion.clone(),
                base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )];
            if !s.description.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", s.description),
                    base.fg(Color::Gray),
                ));
            }
            Line::from(spans).style(base)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" suggestions ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    Some(PopupHit {
        rows: inner,
        first_index,
    })
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
