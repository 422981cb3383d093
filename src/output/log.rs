//! The scroll-back log: an append-only sequence of rendered blocks.
//!
//! Blocks are never mutated, removed, or reordered. Each submission
//! contributes an echo block followed by its result block; the welcome text
//! is a lone result block. Appending snaps the view back to the end.

use super::markdown::{self, Block};

/// One appended fragment: either the echoed command or a rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// The submitted command, shown verbatim behind a `> ` marker.
    Echo(String),
    /// One engine result, already through the rendering pipeline.
    Rendered(Vec<Block>),
}

#[derive(Debug, Default)]
pub struct OutputLog {
    blocks: Vec<OutputBlock>,
    scroll: u16,
    follow: bool,
    max_scroll: u16,
}

impl OutputLog {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            scroll: 0,
            follow: true,
            max_scroll: 0,
        }
    }

    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }

    /// Append-only.
    pub fn append(&mut self, block: OutputBlock) {
        self.blocks.push(block);
        // scroll-to-end signal
        self.follow = true;
    }

    /// Echo a submitted command ahead of its result.
    pub fn append_echo(&mut self, command: &str) {
        self.append(OutputBlock::Echo(command.to_string()));
    }

    /// Run raw result text through the rendering pipeline and append it.
    pub fn append_rendered(&mut self, raw: &str) {
        self.append(OutputBlock::Rendered(markdown::render(raw)));
    }

    /// Convenience for engine-boundary failures: the `! ` error-block form.
    pub fn append_error(&mut self, message: &str) {
        self.append_rendered(&format!("! {message}"));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = (self.scroll + lines).min(self.max_scroll);
        if self.scroll == self.max_scroll {
            self.follow = true;
        }
    }

    /// Resolve the scroll offset for this frame given the rendered extent.
    /// In follow mode the view pins to the end.
    pub fn resolve_scroll(&mut self, total_lines: u16, viewport_height: u16) -> u16 {
        self.max_scroll = total_lines.saturating_sub(viewport_height);
        if self.follow {
            self.scroll = self.max_scroll;
        } else {
            self.scroll = self.scroll.min(self.max_scroll);
        }
        self.scroll
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod log_tests;
