use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for conq
#[derive(Debug, Error)]
pub enum ConqError {
    #[error("invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the command-execution engine.
///
/// These cross the worker channel, so they are owned and cloneable. Engine
/// failures never abort the event loop; they degrade to an empty suggestion
/// set (autocomplete) or a visible `! ` error block (command/init).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{0}")]
    Failed(String),

    #[error("engine unavailable: {0}")]
    Unavailable(String),
}
