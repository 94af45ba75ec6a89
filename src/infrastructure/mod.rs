//! Infrastructure layer: concrete registry and session storage.
//!
//! - [`registry`] - in-memory credential table and user registry
//! - [`session`] - in-memory session store and its reaper task

pub mod registry;
pub mod session;
