mod types;

pub use types::{Config, UiConfig};

use std::path::{Path, PathBuf};

use crate::error::ConqError;

/// Load configuration from `path`, or from the default location
/// (`<config_dir>/conq/config.toml`) when none is given. A missing file
/// yields defaults; an unreadable or malformed file is a startup error.
pub fn load(path: Option<&Path>) -> Result<Config, ConqError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(&path).map_err(|err| ConqError::Config {
        path: path.clone(),
        message: err.to_string(),
    })?;
    toml::from_str(&raw).map_err(|err| ConqError::Config {
        path,
        message: err.to_string(),
    })
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("conq").join("config.toml"))
}
