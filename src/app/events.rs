//! Keyboard routing.
//!
//! Global keys (quit, Tab) are tried first; everything else goes to the
//! focused surface. The prompt owns composing keystrokes, the log owns
//! scrolling, and a printable key pressed while the log has focus hands
//! focus back to the prompt without inserting the character.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::autocomplete;

use super::state::{App, Focus};

impl App {
    /// Handle one key event and update application state.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Press only, to avoid repeat/release duplicates on some terminals.
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_global_keys(key) {
            return;
        }
        match self.focus {
            Focus::Prompt => self.handle_prompt_key(key),
            Focus::Log => self.handle_log_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }
        if key.code == KeyCode::Tab {
            self.on_tab();
            return true;
        }
        false
    }

    /// Tab always belongs to completion, never to focus cycling. With the
    /// list closed this is an ambiguous completion attempt: open it and
    /// query. With it open, commit the unique or highlighted suggestion and
    /// start the next query cycle.
    fn on_tab(&mut self) {
        self.focus = Focus::Prompt;
        if !self.autocomplete.is_open() {
            self.autocomplete.open();
            self.request_suggestions();
            return;
        }
        if autocomplete::commit_tab(&mut self.prompt, &mut self.autocomplete) {
            self.request_suggestions();
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.prompt.text().to_string();
                self.submit(&text);
            }
            KeyCode::Esc => {
                self.autocomplete.close();
            }
            KeyCode::Down if self.autocomplete.is_open() && !self.autocomplete.results().is_empty() => {
                if let Some(picked) = self.autocomplete.select_next() {
                    let suggestion = picked.suggestion.clone();
                    self.preview_suggestion(&suggestion);
                }
            }
            KeyCode::Up if self.autocomplete.is_open() && !self.autocomplete.results().is_empty() => {
                if let Some(picked) = self.autocomplete.select_previous() {
                    let suggestion = picked.suggestion.clone();
                    self.preview_suggestion(&suggestion);
                }
            }
            _ => {
                // A composing keystroke refreshes the query.
                if self.prompt.input(key) {
                    self.request_suggestions();
                }
            }
        }
    }

    /// Show the highlighted suggestion in the prompt without committing it:
    /// same merge as a commit, but the list keeps its cursor.
    fn preview_suggestion(&mut self, suggestion: &str) {
        let command = autocomplete::apply_suggestion(self.prompt.text(), suggestion);
        autocomplete::select_expression(&mut self.prompt, &mut self.autocomplete, &command);
    }

    fn handle_log_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.output.scroll_up(1),
            KeyCode::Down => self.output.scroll_down(1),
            KeyCode::PageUp => self.output.scroll_up(10),
            KeyCode::PageDown => self.output.scroll_down(10),
            KeyCode::Char(_)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                // Typing while reading the log: hand focus back to the
                // prompt, dropping the character itself.
                self.focus = Focus::Prompt;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
