//! Resolution routines tying the prompt, the locator, and the suggestion
//! list together.
//!
//! `select_expression` is the central routine: it decides whether a command
//! still carries an unresolved `[...]` placeholder and, if so, highlights it
//! and opens the list instead of letting the command dispatch.

use crate::bracket;
use crate::prompt::PromptState;

use super::state::AutocompleteState;

/// Set the prompt to `command` and highlight its first bracket expression.
///
/// Returns `true` when a bracket was found: the span is selected, and the
/// list is opened if it was closed (opening is the caller's cue to start a
/// fresh query cycle and hand focus to the prompt). Returns `false` — with
/// the text set but nothing selected — when the command is fully resolved.
pub fn select_expression(
    prompt: &mut PromptState,
    ac: &mut AutocompleteState,
    command: &str,
) -> bool {
    match bracket::locate(command) {
        None => {
            prompt.set_text(command);
            false
        }
        Some(expr) => {
            prompt.set_text_with_selection(command, expr.start, expr.end);
            if !ac.is_open() {
                ac.open();
            }
            true
        }
    }
}

/// Merge a picked suggestion into the current command text.
///
/// When the command has an active bracket expression the suggestion replaces
/// the placeholder's content (`"foo [bar]"` + `"baz"` -> `"foo [baz]"`).
/// Without one, the suggestion is the whole command — the engine's
/// suggestions are full command texts in that case.
pub fn apply_suggestion(current: &str, suggestion: &str) -> String {
    match bracket::locate(current) {
        Some(expr) => format!(
            "{}[{}]{}",
            &current[..expr.byte_start],
            suggestion,
            &current[expr.byte_end..]
        ),
        None => suggestion.to_string(),
    }
}

/// Commit the suggestion at `index`: apply it to the prompt's command,
/// re-select, and re-open the list so a further bracket in the same command
/// can be resolved by another Tab. Returns `true` if a commit happened.
pub fn commit_index(prompt: &mut PromptState, ac: &mut AutocompleteState, index: usize) -> bool {
    let Some(picked) = ac.results().get(index) else {
        return false;
    };
    let suggestion = picked.suggestion.clone();
    let command = apply_suggestion(prompt.text(), &suggestion);
    select_expression(prompt, ac, &command);
    ac.open();
    true
}

/// Tab-commit policy: act only when the list is open and either exactly one
/// result exists or a suggestion is highlighted. Otherwise a no-op.
pub fn commit_tab(prompt: &mut PromptState, ac: &mut AutocompleteState) -> bool {
    if !ac.is_open() {
        return false;
    }
    if ac.results().len() != 1 && ac.cursor() <= -1 {
        return false;
    }
    let index = ac.cursor().max(0) as usize;
    commit_index(prompt, ac, index)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
