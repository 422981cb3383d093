mod dispatch;
mod events;
mod mouse;
mod render;
mod state;

pub use state::{App, Focus};

#[cfg(test)]
pub(crate) mod test_support;
