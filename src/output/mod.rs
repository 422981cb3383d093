mod log;
mod markdown;
mod output_render;

pub use log::{OutputBlock, OutputLog};
pub use markdown::{Block, Inline, render};
pub use output_render::{BuiltLog, CodeTarget, build_lines};
