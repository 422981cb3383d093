//! Host-signal surface: the decoupled embedding mode.
//!
//! A host embedding the console can raise three named signals instead of
//! driving the UI directly: submit a command string, begin an export of
//! persisted state, or begin an interactive import. Signals arrive over an
//! mpsc sender obtained from the app and are drained on the event loop.
//! Export and import belong to the host's persistence collaborator; the
//! console only routes them to registered handlers.

/// A signal raised by an embedding host.
#[derive(Debug)]
pub enum HostSignal {
    /// Submit a command string through the regular dispatch path.
    Command(String),
    /// Begin an export of persisted state; the payload travels opaque.
    Export(serde_json::Value),
    /// Begin an interactive import.
    StartImport,
}
