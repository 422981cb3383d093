//! Suggestion-list state: open/closed, cursor position, current results.
//!
//! All mutation goes through these methods; nothing else touches the fields
//! directly. The list opens on a redirect or an ambiguous Tab-completion
//! attempt and closes on a successful dispatch or an explicit close.

/// One autocomplete entry, as produced by the engine for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub suggestion: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(suggestion: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            suggestion: suggestion.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AutocompleteState {
    open: bool,
    /// Index of the keyboard-highlighted suggestion; -1 means none.
    cursor: isize,
    results: Vec<Suggestion>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self {
            open: false,
            cursor: -1,
            results: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn results(&self) -> &[Suggestion] {
        &self.results
    }

    /// Replace the result set for the latest query. Leaves `open` untouched.
    pub fn on_query_result(&mut self, results: Vec<Suggestion>) {
        self.cursor = self
            .cursor
            .min(results.len() as isize - 1)
            .max(-1);
        self.results = results;
    }

    /// Idempotent.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.cursor = -1;
        self.results.clear();
    }

    /// Move the highlight down, wrapping past the end back to "none".
    pub fn select_next(&mut self) -> Option<&Suggestion> {
        if self.results.is_empty() {
            return None;
        }
        self.cursor += 1;
        if self.cursor >= self.results.len() as isize {
            self.cursor = 0;
        }
        self.results.get(self.cursor as usize)
    }

    /// Move the highlight up, wrapping from the top to the last entry.
    pub fn select_previous(&mut self) -> Option<&Suggestion> {
        if self.results.is_empty() {
            return None;
        }
        self.cursor -= 1;
        if self.cursor < 0 {
            self.cursor = self.results.len() as isize - 1;
        }
        self.results.get(self.cursor as usize)
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.results.len() {
            self.cursor = index as isize;
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
