//! Frame region tracking for position-aware mouse interactions.
//!
//! Updated on every draw; `region_at` maps a screen position back to the
//! component rendered there.

use ratatui::layout::Rect;

use crate::autocomplete::PopupHit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Output,
    Prompt,
    Suggestions,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutRegions {
    pub output: Rect,
    pub prompt: Rect,
    pub suggestions: Option<PopupHit>,
}

impl LayoutRegions {
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        // The popup floats over the log, so test it first.
        if let Some(hit) = &self.suggestions {
            if contains(hit.rows, column, row) {
                return Some(Region::Suggestions);
            }
        }
        if contains(self.prompt, column, row) {
            return Some(Region::Prompt);
        }
        if contains(self.output, column, row) {
            return Some(Region::Output);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
