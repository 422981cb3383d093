//! Turns the log's block model into styled terminal lines.
//!
//! Code spans double as click targets (clicking one resubmits its literal
//! text), so the builder records their display-cell positions while laying
//! spans out.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::log::OutputBlock;
use super::markdown::{Block, Inline};

/// A clickable code span's position in the built line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTarget {
    /// Index into [`BuiltLog::lines`].
    pub line: usize,
    /// First display column of the span within its line.
    pub col: u16,
    /// Display width of the span.
    pub width: u16,
    /// The literal text to resubmit.
    pub text: String,
}

#[derive(Debug, Default)]
pub struct BuiltLog {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<CodeTarget>,
}

impl BuiltLog {
    /// The code target at a (column, line) position, if any.
    pub fn target_at(&self, col: u16, line: usize) -> Option<&CodeTarget> {
        self.targets
            .iter()
            .find(|t| t.line == line && col >= t.col && col < t.col + t.width)
    }
}

/// Build one line per block (echoes and rendered lines alike), recording
/// code-span click targets along the way.
pub fn build_lines(blocks: &[OutputBlock]) -> BuiltLog {
    let mut built = BuiltLog::default();

    for block in blocks {
        match block {
            OutputBlock::Echo(command) => {
                built.lines.push(Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        command.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            OutputBlock::Rendered(rendered) => {
                for line in rendered {
                    push_block_line(&mut built, line);
                }
            }
        }
    }

    built
}

fn push_block_line(built: &mut BuiltLog, block: &Block) {
    let index = built.lines.len();
    let line = match block {
        Block::Blank => Line::default(),
        Block::ErrorLine(content) => layout_spans(
            built,
            index,
            content,
            0,
            Style::default().fg(Color::Red),
            Vec::new(),
        ),
        Block::Heading { level, content } => {
            let style = if *level == 1 {
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            layout_spans(built, index, content, 0, style, Vec::new())
        }
        Block::Bullet(content) => {
            let marker = Span::styled("• ", Style::default().fg(Color::DarkGray));
            layout_spans(built, index, content, 2, Style::default(), vec![marker])
        }
        Block::Paragraph(content) => {
            layout_spans(built, index, content, 0, Style::default(), Vec::new())
        }
    };
    built.lines.push(line);
}

fn layout_spans(
    built: &mut BuiltLog,
    line_index: usize,
    content: &[Inline],
    start_col: u16,
    base: Style,
    mut spans: Vec<Span<'static>>,
) -> Line<'static> {
    let mut col = start_col;

    for inline in content {
        match inline {
            Inline::Text(text) => {
                col += text.width() as u16;
                spans.push(Span::styled(text.clone(), base));
            }
            Inline::Code(text) => {
                let width = text.width() as u16;
                built.targets.push(CodeTarget {
                    line: line_index,
                    col,
                    width,
                    text: text.clone(),
                });
                col += width;
                spans.push(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Yellow).bg(Color::DarkGray),
                ));
            }
            Inline::TempLink(text) => {
                // Code-styled marker for a link that is not live yet; not a
                // click target.
                col += text.width() as u16;
                spans.push(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .bg(Color::Black)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            Inline::Link { text, href } => {
                // The navigation target is spelled out next to the label.
                col += text.width() as u16;
                spans.push(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                let target = format!(" ({href})");
                col += target.width() as u16;
                spans.push(Span::styled(target, Style::default().fg(Color::DarkGray)));
            }
            Inline::Strong(text) => {
                col += text.width() as u16;
                spans.push(Span::styled(
                    text.clone(),
                    base.add_modifier(Modifier::BOLD),
                ));
            }
            Inline::Emphasis(text) => {
                col += text.width() as u16;
                spans.push(Span::styled(
                    text.clone(),
                    base.add_modifier(Modifier::ITALIC),
                ));
            }
        }
    }

    Line::from(spans)
}

#[cfg(test)]
#[path = "output_render_tests.rs"]
mod output_render_tests;
