//! conq — an interactive command console.
//!
//! A single-line prompt sits at the bottom of the screen above an append-only
//! scroll-back log. Typed commands may contain `[...]` placeholder expressions;
//! submitting such a command redirects into suggestion selection instead of
//! dispatch. Resolved commands go to an external execution engine (behind the
//! [`engine::Engine`] trait) and the returned markdown-ish text is rendered
//! into the log.

pub mod app;
pub mod autocomplete;
pub mod bracket;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod layout;
pub mod output;
pub mod prompt;
pub mod widgets;

pub use app::{App, Focus};
pub use config::Config;
pub use engine::{Engine, EngineHandle};
pub use error::{ConqError, EngineError};
