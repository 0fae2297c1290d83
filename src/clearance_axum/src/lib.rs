//! Axum integration for the Clearance login library.
//!
//! This crate provides thin Axum adapters for the framework-agnostic
//! login router defined in `clearance_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  clearance_core: HttpRequest/Response    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  clearance_axum: Axum implementations    │
//! │  - AxumLoginRequest extractor            │
//! │  - AxumResponse                          │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use clearance_adapters::LoginRouter;
//! use clearance_axum::routes;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login))
//!     .with_state(LoginRouter::new(auth_use_case, email_validator));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumLoginRequest, AxumResponse};
