//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic login router, and convert results to Axum responses.

pub mod login;

pub use login::login;
