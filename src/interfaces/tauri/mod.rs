pub(crate) mod core_commands;
pub(crate) mod posting_commands;
pub(crate) mod profile_commands;
pub(crate) mod search_commands;
pub(crate) mod state;

pub use state::AppState;
