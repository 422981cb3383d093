//! Locator for `[...]` placeholder expressions in command text.
//!
//! A bracket expression marks an unresolved argument that still needs to be
//! picked through the suggestion list. The locator is a pure scanner: it
//! finds the leftmost span that opens with `[`, closes with the next `]`,
//! and contains no nested bracket. Absence is a normal outcome.

use memchr::memchr2_iter;

/// The first `[...]` span in a string. Derived on demand, never stored.
///
/// `start`/`end` are char indices (suitable for cursor positioning) covering
/// the brackets themselves; `byte_start`/`byte_end` are the matching byte
/// offsets for splicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketExpression<'a> {
    pub start: usize,
    pub end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
    /// The raw span including brackets, e.g. `"[species]"`.
    pub raw: &'a str,
}

impl<'a> BracketExpression<'a> {
    /// The placeholder text between the brackets.
    pub fn inner(&self) -> &'a str {
        &self.raw[1..self.raw.len() - 1]
    }
}

/// Find the leftmost, shortest non-nested `[...]` span.
///
/// An opening bracket with no `]` after it is not an expression; a `]` with
/// no `[` before it is plain text. Given `"a [b] c [d]"` only `[b]` is found.
pub fn locate(text: &str) -> Option<BracketExpression<'_>> {
    let bytes = text.as_bytes();
    let mut last_open: Option<usize> = None;

    for pos in memchr2_iter(b'[', b']', bytes) {
        if bytes[pos] == b'[' {
            // A later `[` before any `]` shadows the earlier one, which is
            // what makes the match non-nested and shortest.
            last_open = Some(pos);
        } else if let Some(open) = last_open {
            let byte_start = open;
            let byte_end = pos + 1;
            let start = text[..byte_start].chars().count();
            let end = start + text[byte_start..byte_end].chars().count();
            return Some(BracketExpression {
                start,
                end,
                byte_start,
                byte_end,
                raw: &text[byte_start..byte_end],
            });
        }
    }

    None
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
