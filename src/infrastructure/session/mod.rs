//! Session storage.

mod reaper;
mod store;

pub use reaper::run_session_reaper;
pub use store::SessionStore;
