pub mod config;
pub mod email;
pub mod handlers;

pub use email::RegexEmailValidator;
pub use handlers::{LoginRouter, LoginRouterBuilder};
