use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::test_support::test_app;
use crate::app::Focus;
use crate::autocomplete::{PopupHit, Suggestion};
use crate::output;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn scroll(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A 40x20 frame: log on top, prompt at the bottom.
fn lay_out(app: &mut crate::App) {
    app.regions.output = Rect::new(0, 0, 40, 17);
    app.regions.prompt = Rect::new(0, 17, 40, 3);
    app.regions.suggestions = None;
}

#[test]
fn clicking_the_log_moves_focus_there() {
    let (mut app, _probe) = test_app();
    lay_out(&mut app);
    app.handle_mouse_event(click(5, 5));
    assert_eq!(app.focus, Focus::Log);
}

#[test]
fn clicking_the_prompt_moves_focus_back() {
    let (mut app, _probe) = test_app();
    lay_out(&mut app);
    app.focus = Focus::Log;
    app.handle_mouse_event(click(5, 18));
    assert_eq!(app.focus, Focus::Prompt);
}

#[test]
fn wheel_scrolls_the_log_only_over_the_log() {
    let (mut app, _probe) = test_app();
    lay_out(&mut app);
    for i in 0..40 {
        app.output.append_echo(&format!("line {i}"));
    }
    app.output.resolve_scroll(40, 17);
    let pinned = app.output.scroll();

    app.handle_mouse_event(scroll(MouseEventKind::ScrollUp, 5, 5));
    assert_eq!(app.output.scroll(), pinned - 3);

    app.handle_mouse_event(scroll(MouseEventKind::ScrollUp, 5, 18));
    assert_eq!(app.output.scroll(), pinned - 3, "prompt area must not scroll");

    app.handle_mouse_event(scroll(MouseEventKind::ScrollDown, 5, 5));
    assert_eq!(app.output.scroll(), pinned);
}

#[test]
fn clicking_a_code_span_resubmits_its_text() {
    let (mut app, probe) = test_app();
    lay_out(&mut app);
    app.output.append_rendered("try `help` now");
    app.built = output::build_lines(app.output.blocks());
    app.output.resolve_scroll(1, 17);

    // "try " occupies cols 0..4, the span starts at col 4
    app.handle_mouse_event(click(5, 0));
    assert_eq!(probe.drain_commands(), vec![(0, "help".to_string())]);
}

#[test]
fn clicking_plain_log_text_does_not_submit() {
    let (mut app, probe) = test_app();
    lay_out(&mut app);
    app.output.append_rendered("try `help` now");
    app.built = output::build_lines(app.output.blocks());
    app.output.resolve_scroll(1, 17);

    app.handle_mouse_event(click(1, 0));
    assert!(probe.drain_commands().is_empty());
    assert_eq!(app.focus, Focus::Log);
}

#[test]
fn code_span_hit_test_accounts_for_scroll() {
    let (mut app, probe) = test_app();
    lay_out(&mut app);
    for i in 0..20 {
        app.output.append_echo(&format!("filler {i}"));
    }
    app.output.append_rendered("`about`");
    app.built = output::build_lines(app.output.blocks());
    // 21 built lines, viewport 17 -> follow pins scroll to 4; the code
    // span's line 20 lands on screen row 16.
    app.output.resolve_scroll(21, 17);

    app.handle_mouse_event(click(2, 16));
    assert_eq!(probe.drain_commands(), vec![(0, "about".to_string())]);
}

#[test]
fn clicking_a_popup_row_commits_that_suggestion() {
    let (mut app, probe) = test_app();
    lay_out(&mut app);
    app.select_expression("roll [dice]");
    app.autocomplete.on_query_result(vec![
        Suggestion::new("d20", ""),
        Suggestion::new("2d6", ""),
    ]);
    app.regions.suggestions = Some(PopupHit {
        rows: Rect::new(1, 14, 38, 2),
        first_index: 0,
    });
    probe.drain_requests();

    app.handle_mouse_event(click(5, 15)); // second row
    assert_eq!(app.prompt.text(), "roll [2d6]");
    assert_eq!(app.focus, Focus::Prompt);
    assert!(probe.drain_commands().is_empty());
}

#[test]
fn popup_click_honors_the_sliding_window_offset() {
    let (mut app, _probe) = test_app();
    lay_out(&mut app);
    app.select_expression("roll [dice]");
    app.autocomplete.on_query_result(vec![
        Suggestion::new("a", ""),
        Suggestion::new("b", ""),
        Suggestion::new("c", ""),
    ]);
    app.regions.suggestions = Some(PopupHit {
        rows: Rect::new(1, 14, 38, 2),
        first_index: 1,
    });

    app.handle_mouse_event(click(5, 14)); // first visible row = index 1
    assert_eq!(app.prompt.text(), "roll [b]");
}
