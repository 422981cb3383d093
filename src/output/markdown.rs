//! The rendering pipeline for engine result text.
//!
//! Result text is a markdown-ish format extended with one custom block form:
//! a line starting with `! ` is an error line rather than a paragraph. The
//! pipeline turns raw text into a tagged-variant block model through an
//! ordered list of recognizers tried top-to-bottom; inline spans handle
//! code, emphasis, links, and the `~~...~~` temporary-link marker.

/// One rendered line of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Custom `! ` form: a single-line error message.
    ErrorLine(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    Bullet(Vec<Inline>),
    Blank,
    Paragraph(Vec<Inline>),
}

impl Block {
    /// The block's text with all inline markup flattened away.
    pub fn plain_text(&self) -> String {
        let content = match self {
            Block::ErrorLine(c) | Block::Bullet(c) | Block::Paragraph(c) => c,
            Block::Heading { content, .. } => content,
            Block::Blank => return String::new(),
        };
        content.iter().map(Inline::plain_text).collect()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Block::ErrorLine(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Backtick span; clicking one in the log resubmits its literal text.
    Code(String),
    /// `~~...~~`: a temporary-link marker, shown code-styled.
    TempLink(String),
    /// `[text](href)`; rendered with the navigation target spelled out.
    Link { text: String, href: String },
    Strong(String),
    Emphasis(String),
}

impl Inline {
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text(t)
            | Inline::Code(t)
            | Inline::TempLink(t)
            | Inline::Strong(t)
            | Inline::Emphasis(t) => t,
            Inline::Link { text, .. } => text,
        }
    }
}

/// Render raw result text into blocks, one per input line.
pub fn render(raw: &str) -> Vec<Block> {
    raw.lines().map(render_line).collect()
}

type Recognizer = fn(&str) -> Option<Block>;

// Tried top-to-bottom; the paragraph fallback always matches.
const RECOGNIZERS: &[Recognizer] = &[
    recognize_error_line,
    recognize_heading,
    recognize_bullet,
    recognize_blank,
];

fn render_line(line: &str) -> Block {
    for recognize in RECOGNIZERS {
        if let Some(block) = recognize(line) {
            return block;
        }
    }
    Block::Paragraph(parse_inline(line))
}

fn recognize_error_line(line: &str) -> Option<Block> {
    line.strip_prefix("! ")
        .map(|rest| Block::ErrorLine(parse_inline(rest)))
}

fn recognize_heading(line: &str) -> Option<Block> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = line[level..].strip_prefix(' ')?;
    Some(Block::Heading {
        level: level as u8,
        content: parse_inline(rest),
    })
}

fn recognize_bullet(line: &str) -> Option<Block> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))?;
    Some(Block::Bullet(parse_inline(rest)))
}

fn recognize_blank(line: &str) -> Option<Block> {
    line.trim().is_empty().then_some(Block::Blank)
}

/// Parse inline markup. Unterminated markers fall back to literal text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((span, after)) = take_marked_span(rest) {
            if !plain.is_empty() {
                spans.push(Inline::Text(std::mem::take(&mut plain)));
            }
            spans.push(span);
            rest = after;
        } else {
            let ch = rest.chars().next().unwrap();
            plain.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    if !plain.is_empty() {
        spans.push(Inline::Text(plain));
    }
    spans
}

fn take_marked_span(rest: &str) -> Option<(Inline, &str)> {
    if let Some(body) = rest.strip_prefix('`') {
        let end = body.find('`')?;
        return Some((Inline::Code(body[..end].to_string()), &body[end + 1..]));
    }
    if let Some(body) = rest.strip_prefix("~~") {
        let end = body.find("~~")?;
        return Some((Inline::TempLink(body[..end].to_string()), &body[end + 2..]));
    }
    if let Some(body) = rest.strip_prefix("**") {
        let end = body.find("**")?;
        return Some((Inline::Strong(body[..end].to_string()), &body[end + 2..]));
    }
    if let Some(body) = rest.strip_prefix('*') {
        let end = body.find('*')?;
        return Some((Inline::Emphasis(body[..end].to_string()), &body[end + 1..]));
    }
    if rest.starts_with('[') {
        return take_link(rest);
    }
    None
}

fn take_link(rest: &str) -> Option<(Inline, &str)> {
    let close = rest.find(']')?;
    let after_close = &rest[close + 1..];
    let href_body = after_close.strip_prefix('(')?;
    let href_end = href_body.find(')')?;
    Some((
        Inline::Link {
            text: rest[1..close].to_string(),
            href: href_body[..href_end].to_string(),
        },
        &href_body[href_end + 1..],
    ))
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod markdown_tests;
