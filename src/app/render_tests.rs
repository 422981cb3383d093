use ratatui::{Terminal, backend::TestBackend};

use crate::app::test_support::test_app;
use crate::autocomplete::Suggestion;
use crate::layout::Region;

fn draw(app: &mut crate::App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16, width: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn log_fills_the_top_and_prompt_the_bottom_three_rows() {
    let (mut app, _probe) = test_app();
    app.output.append_echo("hello");
    let terminal = draw(&mut app, 40, 12);

    assert_eq!(app.regions.output.height, 9);
    assert_eq!(app.regions.prompt.y, 9);
    assert_eq!(app.regions.prompt.height, 3);
    assert!(row_text(&terminal, 0, 40).contains("> hello"));
}

#[test]
fn prompt_border_carries_the_configured_title() {
    let (mut app, _probe) = test_app();
    let terminal = draw(&mut app, 40, 12);
    assert!(row_text(&terminal, 9, 40).contains("conq"));
}

#[test]
fn long_log_pins_to_the_latest_line() {
    let (mut app, _probe) = test_app();
    for i in 0..30 {
        app.output.append_echo(&format!("line {i}"));
    }
    let terminal = draw(&mut app, 40, 12);
    // last visible log row shows the newest entry
    assert!(row_text(&terminal, 8, 40).contains("line 29"));
}

#[test]
fn open_list_floats_over_the_log_and_registers_a_region() {
    let (mut app, _probe) = test_app();
    app.autocomplete.open();
    app.autocomplete
        .on_query_result(vec![Suggestion::new("help", "list commands")]);
    let terminal = draw(&mut app, 40, 12);

    let hit = app.regions.suggestions.expect("popup must register a hit");
    assert_eq!(
        app.regions.region_at(hit.rows.x, hit.rows.y),
        Some(Region::Suggestions)
    );
    assert!(row_text(&terminal, hit.rows.y, 40).contains("help"));
}

#[test]
fn click_targets_match_the_drawn_frame() {
    let (mut app, _probe) = test_app();
    app.output.append_rendered("run `help`");
    draw(&mut app, 40, 12);

    let target = app.built.target_at(4, 0).expect("span starts at col 4");
    assert_eq!(target.text, "help");
}
