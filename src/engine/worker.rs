//! Engine worker thread.
//!
//! Receives requests over a channel, calls into the engine, and sends
//! responses back to the UI thread. The single worker processes requests
//! strictly in order, which is what keeps command results in submission
//! order. Bursts of autocomplete requests are collapsed down to the newest
//! one before the engine is called; the UI's request_id filter handles any
//! stale response that still slips through.

use std::sync::mpsc::{Receiver, Sender, channel};

use super::{Engine, EngineHandle, EngineRequest, EngineResponse};

/// Spawn the worker thread and hand back the UI side of its channels.
pub fn spawn_worker(engine: impl Engine + 'static) -> EngineHandle {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();

    std::thread::spawn(move || {
        worker_loop(engine, request_rx, response_tx);
    });

    EngineHandle {
        request_tx,
        response_rx,
    }
}

fn worker_loop(
    mut engine: impl Engine,
    request_rx: Receiver<EngineRequest>,
    response_tx: Sender<EngineResponse>,
) {
    // Holds a non-autocomplete request picked up while collapsing a burst.
    let mut carried: Option<EngineRequest> = None;

    loop {
        let request = match carried.take() {
            Some(request) => request,
            None => match request_rx.recv() {
                Ok(request) => request,
                Err(_) => break,
            },
        };

        let request = if matches!(request, EngineRequest::Autocomplete { .. }) {
            collapse_autocomplete_burst(request, &request_rx, &mut carried)
        } else {
            request
        };

        let response = match request {
            EngineRequest::Initialize => EngineResponse::Welcome {
                result: engine.initialize(),
            },
            EngineRequest::Autocomplete { query, request_id } => EngineResponse::Suggestions {
                request_id,
                result: engine.autocomplete(&query),
            },
            EngineRequest::Command { input, seq } => EngineResponse::CommandDone {
                seq,
                result: engine.command(&input),
            },
        };

        if response_tx.send(response).is_err() {
            // UI thread is gone.
            break;
        }
    }

    log::debug!("engine worker shutting down");
}

/// Drain queued requests, keeping only the newest autocomplete query. A
/// non-autocomplete request ends the burst and is carried to the next
/// iteration so nothing is skipped.
fn collapse_autocomplete_burst(
    newest: EngineRequest,
    request_rx: &Receiver<EngineRequest>,
    carried: &mut Option<EngineRequest>,
) -> EngineRequest {
    let mut newest = newest;
    while let Ok(next) = request_rx.try_recv() {
        match next {
            EngineRequest::Autocomplete { .. } => newest = next,
            other => {
                *carried = Some(other);
                break;
            }
        }
    }
    newest
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
