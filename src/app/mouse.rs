//! Mouse routing against the regions recorded by the last draw.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::autocomplete;
use crate::layout::Region;

use super::state::{App, Focus};

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollUp => {
                if self.regions.region_at(mouse.column, mouse.row) == Some(Region::Output) {
                    self.output.scroll_up(3);
                }
            }
            MouseEventKind::ScrollDown => {
                if self.regions.region_at(mouse.column, mouse.row) == Some(Region::Output) {
                    self.output.scroll_down(3);
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        match self.regions.region_at(column, row) {
            Some(Region::Suggestions) => self.click_suggestion(row),
            Some(Region::Output) => self.click_output(column, row),
            Some(Region::Prompt) => self.focus = Focus::Prompt,
            None => {}
        }
    }

    /// Clicking a popup row commits that suggestion, same path as Tab.
    fn click_suggestion(&mut self, row: u16) {
        let Some(hit) = self.regions.suggestions else {
            return;
        };
        let index = hit.first_index + (row - hit.rows.y) as usize;
        if autocomplete::commit_index(&mut self.prompt, &mut self.autocomplete, index) {
            self.focus = Focus::Prompt;
            self.request_suggestions();
        }
    }

    /// A click on a code span resubmits its literal text; anywhere else in
    /// the log just moves focus there.
    fn click_output(&mut self, column: u16, row: u16) {
        let area = self.regions.output;
        let line = (row - area.y) as usize + self.output.scroll() as usize;
        let col = column - area.x;
        if let Some(target) = self.built.target_at(col, line) {
            let text = target.text.clone();
            self.submit(&text);
            return;
        }
        self.focus = Focus::Log;
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
