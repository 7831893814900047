//! Table state and host hooks.

mod inputs;
mod state;

pub use inputs::{InputChanges, InputField};
pub use state::DataTable;
