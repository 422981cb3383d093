//! Prompt state: the current raw input text and the active selection range.
//!
//! Wraps the single-line textarea widget. The selection, when present, is a
//! valid char sub-range of the text; it is set programmatically when a
//! bracket expression is highlighted after a redirect. Whoever sets a
//! selection must also give the prompt input focus (handled at the app
//! level).

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

pub struct PromptState {
    pub(super) textarea: TextArea<'static>,
}

impl PromptState {
    pub fn new(title: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        // No underline on the cursor line; selection shown as a highlight.
        textarea.set_cursor_line_style(Style::default());
        textarea.set_selection_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );
        Self { textarea }
    }

    /// Current prompt text.
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Active selection as a `[start, end)` char range, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let ((_, start), (_, end)) = self.textarea.selection_range()?;
        if start == end {
            return None;
        }
        Some((start.min(end), start.max(end)))
    }

    /// Replace the text and clear any selection.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.cancel_selection();
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        // The prompt is a single line; fold any stray newlines away.
        if text.contains('\n') {
            self.textarea.insert_str(text.replace('\n', " "));
        } else {
            self.textarea.insert_str(text);
        }
    }

    /// Replace the text and select the `[start, end)` char range.
    ///
    /// Requires `0 <= start <= end <= char-length`; out-of-range input is a
    /// caller bug and gets clamped.
    pub fn set_text_with_selection(&mut self, text: &str, start: usize, end: usize) {
        self.set_text(text);
        let len = self.text().chars().count();
        debug_assert!(start <= end && end <= len, "selection out of range");
        let end = end.min(len);
        let start = start.min(end);

        self.textarea
            .move_cursor(CursorMove::Jump(0, start as u16));
        self.textarea.start_selection();
        self.textarea.move_cursor(CursorMove::Jump(0, end as u16));
    }

    /// Reset to empty text with no selection. Called after each dispatch.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Feed a key event into the textarea. Returns true when the text was
    /// modified (a composing keystroke, which should refresh suggestions).
    pub fn input(&mut self, key: impl Into<tui_textarea::Input>) -> bool {
        self.textarea.input(key)
    }
}

#[cfg(test)]
#[path = "prompt_state_tests.rs"]
mod prompt_state_tests;
