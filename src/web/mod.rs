//! Web layer for the browser-based login flow.
//!
//! Serves HTML pages rendered with Askama templates and turns login view
//! effects into cookies and redirects.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`middleware`] - Session authentication
//! - [`routes`] - Page route configuration
//! - [`effects`] - Collaborator implementations used by the login handler
//! - [`cookies`] / [`flash`] - Cookie and flash message helpers

pub mod cookies;
pub mod effects;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod routes;
