mod autocomplete_render;
mod resolve;
mod state;

pub use autocomplete_render::{PopupHit, render_popup};
pub use resolve::{apply_suggestion, commit_index, commit_tab, select_expression};
pub use state::{AutocompleteState, Suggestion};
