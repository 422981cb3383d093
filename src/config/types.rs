// Configuration type definitions

use serde::Deserialize;

/// UI configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_max_suggestion_rows")]
    pub max_suggestion_rows: u16,

    #[serde(default = "default_prompt_title")]
    pub prompt_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_suggestion_rows: default_max_suggestion_rows(),
            prompt_title: default_prompt_title(),
        }
    }
}

fn default_max_suggestion_rows() -> u16 {
    8
}

fn default_prompt_title() -> String {
    "conq".to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}
