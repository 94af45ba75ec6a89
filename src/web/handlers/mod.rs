//! HTML template rendering handlers for the web pages.

mod admin;
mod home;
mod login;
mod logout;

pub use admin::admin_handler;
pub use home::home_handler;
pub use login::{login_page_handler, login_submit_handler};
pub use logout::logout_handler;
