//! Shared fixtures for app-level tests: an [`App`] wired to bare channels
//! so tests play the engine side themselves.

use std::sync::mpsc::{Receiver, Sender, channel};

use crate::config::Config;
use crate::engine::{EngineHandle, EngineRequest, EngineResponse};

use super::state::App;

pub(crate) struct EngineProbe {
    pub(crate) requests: Receiver<EngineRequest>,
    pub(crate) responses: Sender<EngineResponse>,
}

impl EngineProbe {
    /// Every request received so far.
    pub(crate) fn drain_requests(&self) -> Vec<EngineRequest> {
        let mut seen = Vec::new();
        while let Ok(request) = self.requests.try_recv() {
            seen.push(request);
        }
        seen
    }

    /// The `Command` requests received so far, as `(seq, input)`.
    pub(crate) fn drain_commands(&self) -> Vec<(u64, String)> {
        self.drain_requests()
            .into_iter()
            .filter_map(|request| match request {
                EngineRequest::Command { input, seq } => Some((seq, input)),
                _ => None,
            })
            .collect()
    }
}

pub(crate) fn test_app() -> (App, EngineProbe) {
    let (request_tx, requests) = channel();
    let (responses, response_rx) = channel();
    let app = App::new(
        Config::default(),
        EngineHandle {
            request_tx,
            response_rx,
        },
    );
    (app, EngineProbe { requests, responses })
}
