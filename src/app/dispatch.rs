//! Submission dispatch: redirect-or-execute, serialized.
//!
//! `submit` is the single entry point for user-initiated submissions. A
//! command with an unresolved bracket expression never dispatches; it is
//! redirected into suggestion selection. Resolved commands go to the engine
//! one at a time: while one is in flight, new submissions wait in a FIFO
//! queue, so each echo/result pair lands contiguously and results arrive in
//! submission order.

use std::collections::VecDeque;

use crate::engine::EngineRequest;
use crate::error::EngineError;

use super::state::App;

#[derive(Debug, Default)]
pub(crate) struct DispatchState {
    pub(crate) next_seq: u64,
    pub(crate) in_flight: Option<u64>,
    pub(crate) pending: VecDeque<String>,
}

impl App {
    /// Submit a command. Empty input is a no-op; input with a bracket
    /// expression becomes a selection action instead of a dispatch.
    pub fn submit(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        if self.select_expression(raw) {
            return;
        }
        if self.dispatch.in_flight.is_some() {
            self.dispatch.pending.push_back(raw.to_string());
            return;
        }
        self.dispatch_now(raw.to_string());
    }

    fn dispatch_now(&mut self, input: String) {
        let seq = self.dispatch.next_seq;
        self.dispatch.next_seq += 1;

        // Echo first, then clear the prompt for the next command; the list
        // closes on dispatch.
        self.output.append_echo(&input);
        self.prompt.clear();
        self.autocomplete.close();

        if self
            .engine
            .request_tx
            .send(EngineRequest::Command { input, seq })
            .is_ok()
        {
            self.dispatch.in_flight = Some(seq);
        } else {
            self.output.append_error("the command engine is not running");
        }
    }

    pub(crate) fn on_command_done(&mut self, seq: u64, result: Result<String, EngineError>) {
        if self.dispatch.in_flight != Some(seq) {
            log::warn!("dropping result for unknown submission {seq}");
            return;
        }
        self.dispatch.in_flight = None;

        match result {
            Ok(text) => self.output.append_rendered(&text),
            Err(err) => self.output.append_error(&err.to_string()),
        }

        if let Some(next) = self.dispatch.pending.pop_front() {
            self.dispatch_now(next);
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
