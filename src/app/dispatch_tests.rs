use crate::app::test_support::test_app;
use crate::engine::EngineResponse;
use crate::error::EngineError;
use crate::output::OutputBlock;

fn echo_of(block: &OutputBlock) -> Option<&str> {
    match block {
        OutputBlock::Echo(command) => Some(command),
        OutputBlock::Rendered(_) => None,
    }
}

#[test]
fn plain_command_dispatches_exactly_once() {
    let (mut app, probe) = test_app();
    app.submit("look around");

    let commands = probe.drain_commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].1, "look around");

    // echo appended immediately, prompt cleared, list closed
    assert_eq!(app.output.blocks().len(), 1);
    assert_eq!(echo_of(&app.output.blocks()[0]), Some("look around"));
    assert_eq!(app.prompt.text(), "");
    assert!(!app.autocomplete.is_open());
}

#[test]
fn result_lands_right_after_its_echo() {
    let (mut app, probe) = test_app();
    app.submit("help");
    let (seq, _) = probe.drain_commands()[0];

    probe
        .responses
        .send(EngineResponse::CommandDone {
            seq,
            result: Ok("all good".to_string()),
        })
        .unwrap();
    app.drain_engine();

    let blocks = app.output.blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(echo_of(&blocks[0]), Some("help"));
    assert!(matches!(&blocks[1], OutputBlock::Rendered(_)));
}

#[test]
fn empty_submission_is_a_noop() {
    let (mut app, probe) = test_app();
    app.submit("");
    app.submit("   ");
    assert!(probe.drain_requests().is_empty());
    assert!(app.output.blocks().is_empty());
}

#[test]
fn bracket_expression_redirects_instead_of_dispatching() {
    let (mut app, probe) = test_app();
    app.submit("create [species]");

    assert!(probe.drain_commands().is_empty());
    assert!(app.output.blocks().is_empty());
    assert_eq!(app.prompt.text(), "create [species]");
    assert_eq!(app.prompt.selection(), Some((7, 16)));
    assert!(app.autocomplete.is_open());
}

#[test]
fn rapid_submissions_never_interleave() {
    let (mut app, probe) = test_app();
    app.submit("first");
    app.submit("second"); // queued: one is already in flight

    let commands = probe.drain_commands();
    assert_eq!(commands.len(), 1, "second must wait for the first result");
    let (seq1, _) = commands[0];

    probe
        .responses
        .send(EngineResponse::CommandDone {
            seq: seq1,
            result: Ok("one".to_string()),
        })
        .unwrap();
    app.drain_engine();

    // the queued command dispatched only now
    let commands = probe.drain_commands();
    assert_eq!(commands.len(), 1);
    let (seq2, input2) = commands[0].clone();
    assert_eq!(input2, "second");

    probe
        .responses
        .send(EngineResponse::CommandDone {
            seq: seq2,
            result: Ok("two".to_string()),
        })
        .unwrap();
    app.drain_engine();

    let kinds: Vec<Option<&str>> = app.output.blocks().iter().map(echo_of).collect();
    assert_eq!(
        kinds,
        vec![Some("first"), None, Some("second"), None],
        "echo/result pairs must stay contiguous and ordered"
    );
}

#[test]
fn queued_submissions_drain_in_fifo_order() {
    let (mut app, probe) = test_app();
    app.submit("a");
    app.submit("b");
    app.submit("c");

    let mut inputs = Vec::new();
    loop {
        let commands = probe.drain_commands();
        if commands.is_empty() {
            break;
        }
        for (seq, input) in commands {
            inputs.push(input);
            probe
                .responses
                .send(EngineResponse::CommandDone {
                    seq,
                    result: Ok("ok".to_string()),
                })
                .unwrap();
        }
        app.drain_engine();
    }
    assert_eq!(inputs, vec!["a", "b", "c"]);
}

#[test]
fn failed_command_renders_an_error_block() {
    let (mut app, probe) = test_app();
    app.submit("explode");
    let (seq, _) = probe.drain_commands()[0];

    probe
        .responses
        .send(EngineResponse::CommandDone {
            seq,
            result: Err(EngineError::Failed("boom".to_string())),
        })
        .unwrap();
    app.drain_engine();

    let OutputBlock::Rendered(blocks) = &app.output.blocks()[1] else {
        panic!("expected a rendered block");
    };
    assert!(blocks[0].is_error());
    assert!(blocks[0].plain_text().contains("boom"));
}

#[test]
fn welcome_failure_is_surfaced_as_error_block() {
    let (mut app, probe) = test_app();
    app.start();
    probe
        .responses
        .send(EngineResponse::Welcome {
            result: Err(EngineError::Unavailable("no backend".to_string())),
        })
        .unwrap();
    app.drain_engine();

    let OutputBlock::Rendered(blocks) = &app.output.blocks()[0] else {
        panic!("expected a rendered block");
    };
    assert!(blocks[0].is_error());
    assert!(blocks[0].plain_text().contains("startup failed"));
}

#[test]
fn welcome_text_is_the_first_block() {
    let (mut app, probe) = test_app();
    app.start();
    probe
        .responses
        .send(EngineResponse::Welcome {
            result: Ok("# hello".to_string()),
        })
        .unwrap();
    app.drain_engine();
    assert_eq!(app.output.blocks().len(), 1);
}

#[test]
fn stale_suggestions_are_dropped() {
    let (mut app, probe) = test_app();
    app.select_expression("roll [dice]");
    app.request_suggestions(); // a newer query supersedes the redirect's one

    probe
        .responses
        .send(EngineResponse::Suggestions {
            request_id: 1, // the older query
            result: Ok(vec![crate::autocomplete::Suggestion::new("old", "")]),
        })
        .unwrap();
    app.drain_engine();
    assert!(app.autocomplete.results().is_empty());

    probe
        .responses
        .send(EngineResponse::Suggestions {
            request_id: 2,
            result: Ok(vec![crate::autocomplete::Suggestion::new("new", "")]),
        })
        .unwrap();
    app.drain_engine();
    assert_eq!(app.autocomplete.results()[0].suggestion, "new");
}

#[test]
fn autocomplete_failure_degrades_to_empty_results() {
    let (mut app, probe) = test_app();
    app.select_expression("roll [dice]");
    app.autocomplete
        .on_query_result(vec![crate::autocomplete::Suggestion::new("d20", "")]);

    probe
        .responses
        .send(EngineResponse::Suggestions {
            request_id: 1,
            result: Err(EngineError::Failed("backend hiccup".to_string())),
        })
        .unwrap();
    app.drain_engine();
    assert!(app.autocomplete.results().is_empty());
    assert!(app.autocomplete.is_open(), "failure must not close the loop");
}

#[test]
fn engine_disconnect_fails_pending_submissions_visibly() {
    let (mut app, probe) = test_app();
    app.submit("first");
    app.submit("second");
    drop(probe.responses);

    app.drain_engine();
    let last = app.output.blocks().last().unwrap();
    let OutputBlock::Rendered(blocks) = last else {
        panic!("expected a rendered block");
    };
    assert!(blocks[0].is_error());
    assert!(app.dispatch.pending.is_empty());
}
