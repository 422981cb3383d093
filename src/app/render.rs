//! Frame layout and drawing: log on top, prompt at the bottom, suggestion
//! popup floating above the prompt. Every draw refreshes the hit-test
//! regions used by mouse routing.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Paragraph,
};

use crate::autocomplete::render_popup;
use crate::output;
use crate::prompt::render_prompt;

use super::state::{App, Focus};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [output_area, prompt_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

        self.built = output::build_lines(self.output.blocks());
        let scroll = self
            .output
            .resolve_scroll(self.built.lines.len() as u16, output_area.height);
        frame.render_widget(
            Paragraph::new(self.built.lines.clone()).scroll((scroll, 0)),
            output_area,
        );

        render_prompt(&mut self.prompt, frame, prompt_area, self.focus == Focus::Prompt);

        self.regions.output = output_area;
        self.regions.prompt = prompt_area;
        self.regions.suggestions = render_popup(
            &self.autocomplete,
            frame,
            prompt_area,
            self.config.ui.max_suggestion_rows,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
