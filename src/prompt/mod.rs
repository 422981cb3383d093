mod prompt_render;
mod prompt_state;

pub use prompt_render::render_prompt;
pub use prompt_state::PromptState;
