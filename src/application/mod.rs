//! Application layer: the login flow.
//!
//! - [`services`] - credential validation ([`services::LoginService`])
//! - [`login_view`] - form submission handling ([`login_view::LoginView`])
//! - [`login_form`] - form input and field constraints
//! - [`messages`] - fixed operator-facing messages

pub mod login_form;
pub mod login_view;
pub mod messages;
pub mod services;
