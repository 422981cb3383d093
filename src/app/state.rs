//! Application state and the engine/host response plumbing.
//!
//! All controller state lives here, owned by [`App`] and mutated only
//! through its methods: the prompt, the suggestion list, the output log,
//! focus, and the dispatch bookkeeping. Input sources (keys, clicks, host
//! signals, engine responses) all funnel into this one place.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use crate::autocomplete::{self, AutocompleteState};
use crate::config::Config;
use crate::engine::{EngineHandle, EngineRequest, EngineResponse};
use crate::host::HostSignal;
use crate::layout::LayoutRegions;
use crate::output::{BuiltLog, OutputLog};
use crate::prompt::PromptState;

use super::dispatch::DispatchState;

/// Which surface has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    Log,
}

/// Application state
pub struct App {
    pub config: Config,
    pub prompt: PromptState,
    pub autocomplete: AutocompleteState,
    pub output: OutputLog,
    pub focus: Focus,
    pub regions: LayoutRegions,
    pub(crate) engine: EngineHandle,
    pub(crate) dispatch: DispatchState,
    /// Latest autocomplete query id; anything older is stale.
    pub(crate) autocomplete_request_id: u64,
    /// Lines and click targets from the last draw.
    pub(crate) built: BuiltLog,
    host_tx: Sender<HostSignal>,
    host_rx: Receiver<HostSignal>,
    on_export: Option<Box<dyn FnMut(serde_json::Value)>>,
    on_import: Option<Box<dyn FnMut()>>,
    engine_down: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, engine: EngineHandle) -> Self {
        let prompt = PromptState::new(&config.ui.prompt_title);
        let (host_tx, host_rx) = channel();
        Self {
            config,
            prompt,
            autocomplete: AutocompleteState::new(),
            output: OutputLog::new(),
            focus: Focus::Prompt,
            regions: LayoutRegions::default(),
            engine,
            dispatch: DispatchState::default(),
            autocomplete_request_id: 0,
            built: BuiltLog::default(),
            host_tx,
            host_rx,
            on_export: None,
            on_import: None,
            engine_down: false,
            should_quit: false,
        }
    }

    /// Kick off the one-time engine initialization; the welcome text lands
    /// as the first output block once the response is drained.
    pub fn start(&mut self) {
        let _ = self.engine.request_tx.send(EngineRequest::Initialize);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sender a host can use to raise signals from outside the UI.
    pub fn host_sender(&self) -> Sender<HostSignal> {
        self.host_tx.clone()
    }

    pub fn set_export_handler(&mut self, handler: impl FnMut(serde_json::Value) + 'static) {
        self.on_export = Some(Box::new(handler));
    }

    pub fn set_import_handler(&mut self, handler: impl FnMut() + 'static) {
        self.on_import = Some(Box::new(handler));
    }

    /// Set the prompt to `command`, highlighting its first bracket
    /// expression. A `true` return is a redirect: the submission became a
    /// selection action, focus moves to the prompt, and — when the list was
    /// just opened — a fresh query cycle starts.
    pub fn select_expression(&mut self, command: &str) -> bool {
        let was_open = self.autocomplete.is_open();
        if !autocomplete::select_expression(&mut self.prompt, &mut self.autocomplete, command) {
            return false;
        }
        self.focus = Focus::Prompt;
        if !was_open {
            self.request_suggestions();
        }
        true
    }

    /// Issue an autocomplete query for the current prompt text. The query
    /// is the portion before any bracket marker: suggestions complete the
    /// active word, not the full command.
    pub(crate) fn request_suggestions(&mut self) {
        self.autocomplete_request_id = self.autocomplete_request_id.wrapping_add(1);
        let query = self
            .prompt
            .text()
            .split('[')
            .next()
            .unwrap_or_default()
            .to_string();
        let _ = self.engine.request_tx.send(EngineRequest::Autocomplete {
            query,
            request_id: self.autocomplete_request_id,
        });
    }

    /// Drain engine responses queued since the last frame.
    pub fn drain_engine(&mut self) {
        loop {
            match self.engine.response_rx.try_recv() {
                Ok(response) => self.on_engine_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.on_engine_gone();
                    break;
                }
            }
        }
    }

    fn on_engine_response(&mut self, response: EngineResponse) {
        match response {
            EngineResponse::Welcome { result: Ok(motd) } => {
                self.output.append_rendered(&motd);
            }
            EngineResponse::Welcome { result: Err(err) } => {
                // Surfaced rather than swallowed: a dead engine behind a
                // blank screen is worse than startup noise.
                log::error!("engine initialization failed: {err}");
                self.output.append_error(&format!("startup failed: {err}"));
            }
            EngineResponse::Suggestions { request_id, result } => {
                if request_id != self.autocomplete_request_id {
                    log::debug!("dropping stale suggestions for query {request_id}");
                    return;
                }
                let results = match result {
                    Ok(results) => results,
                    Err(err) => {
                        // Degrade to an empty set; keystroke handling
                        // continues either way.
                        log::debug!("autocomplete failed: {err}");
                        Vec::new()
                    }
                };
                self.autocomplete.on_query_result(results);
            }
            EngineResponse::CommandDone { seq, result } => self.on_command_done(seq, result),
        }
    }

    fn on_engine_gone(&mut self) {
        if self.engine_down {
            return;
        }
        self.engine_down = true;
        log::error!("engine worker disconnected");
        if self.dispatch.in_flight.take().is_some() || !self.dispatch.pending.is_empty() {
            self.dispatch.pending.clear();
            self.output
                .append_error("the command engine stopped responding");
        }
    }

    /// Drain signals raised by an embedding host.
    pub fn drain_host_signals(&mut self) {
        while let Ok(signal) = self.host_rx.try_recv() {
            match signal {
                HostSignal::Command(command) => self.submit(&command),
                HostSignal::Export(payload) => match self.on_export.as_mut() {
                    Some(handler) => handler(payload),
                    None => log::debug!("export signal raised with no handler registered"),
                },
                HostSignal::StartImport => match self.on_import.as_mut() {
                    Some(handler) => handler(),
                    None => log::debug!("import signal raised with no handler registered"),
                },
            }
        }
    }
}
