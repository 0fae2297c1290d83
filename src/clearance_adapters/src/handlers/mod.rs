//! Framework-agnostic request handlers.
//!
//! These handlers contain the request validation logic without any framework dependencies.
//! Framework-specific routes (Axum, Actix, etc.) turn their requests into an `HttpRequest`,
//! call these handlers, and convert the returned `HttpResponse` back to framework responses.

pub mod login;

pub use login::{LoginRouter, LoginRouterBuilder};
