//! Prompt rendering: border styling tracks focus, cursor hidden when the
//! scroll-back log has focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::PromptState;

pub fn render_prompt(prompt: &mut PromptState, frame: &mut Frame, area: Rect, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    if let Some(block) = prompt.textarea.block() {
        let block = block.clone().border_style(border_style);
        prompt.textarea.set_block(block);
    }
    prompt.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&prompt.textarea, area);
}
