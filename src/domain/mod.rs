//! Domain layer containing login entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Users, attempts, outcomes and sessions
//! - [`repositories`] - Credential table and user registry traits
//! - [`collaborators`] - Session, notification and navigation traits
//!
//! The domain layer has no dependencies on the web or infrastructure layers.

pub mod collaborators;
pub mod entities;
pub mod repositories;
