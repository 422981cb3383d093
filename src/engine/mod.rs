//! The command-execution engine boundary.
//!
//! The engine is an external capability with three operations: `initialize`
//! (welcome text), `autocomplete` (ordered suggestions for a query), and
//! `command` (result text for a submitted command). The UI never calls it
//! directly; requests cross an mpsc channel to a worker thread so the event
//! loop stays responsive, and responses are drained between frames.

mod demo;
mod worker;

pub use demo::DemoEngine;
pub use worker::spawn_worker;

use std::sync::mpsc::{Receiver, Sender};

use crate::autocomplete::Suggestion;
use crate::error::EngineError;

pub trait Engine: Send {
    /// Called once at startup; the result becomes the first output block.
    fn initialize(&mut self) -> Result<String, EngineError>;

    /// Ordered suggestions for the query (the prompt text before any `[`).
    fn autocomplete(&mut self, query: &str) -> Result<Vec<Suggestion>, EngineError>;

    /// Interpret a resolved command; the result follows the rendering
    /// grammar (a leading `! ` line is an error block).
    fn command(&mut self, input: &str) -> Result<String, EngineError>;
}

/// Requests sent to the engine worker thread.
#[derive(Debug)]
pub enum EngineRequest {
    Initialize,
    Autocomplete {
        query: String,
        /// Monotonic id; stale responses are dropped on the UI side.
        request_id: u64,
    },
    Command {
        input: String,
        /// Submission sequence number, for pairing with the response.
        seq: u64,
    },
}

/// Responses received from the engine worker thread.
#[derive(Debug)]
pub enum EngineResponse {
    Welcome {
        result: Result<String, EngineError>,
    },
    Suggestions {
        request_id: u64,
        result: Result<Vec<Suggestion>, EngineError>,
    },
    CommandDone {
        seq: u64,
        result: Result<String, EngineError>,
    },
}

/// The UI side of the worker channels.
pub struct EngineHandle {
    pub request_tx: Sender<EngineRequest>,
    pub response_rx: Receiver<EngineResponse>,
}
