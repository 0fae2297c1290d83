//! # Clearance - Login Endpoint Library
//!
//! This is a facade crate that re-exports all public APIs from the login components.
//! Use this crate to get access to all login functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! clearance = { path = "../clearance" }
//! ```
//!
//! ## Structure
//!
//! - **Core types**: `HttpRequest`, `HttpResponse`, `LoginError`, `AccessToken`, etc.
//! - **Collaborator traits**: `AuthUseCase`, `EmailValidator`
//! - **Adapters**: `LoginRouter`, `RegexEmailValidator`, configuration
//! - **Service**: `LoginService` - standalone axum server exposing `POST /login`

// ============================================================================
// Core Types
// ============================================================================

/// Core types, error taxonomy and request/response envelopes
pub mod core {
    pub use clearance_core::*;
}

// Re-export most commonly used core types at the root level
pub use clearance_core::{
    AccessToken, Credentials, HttpRequest, HttpResponse, LoginError, LoginOutcome, ServerFault,
};

// ============================================================================
// Collaborator Traits (Ports)
// ============================================================================

/// Collaborator trait definitions
pub mod ports {
    pub use clearance_core::{AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError};
}

pub use clearance_core::{AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use clearance_adapters::handlers::*;
    }

    /// Email validator implementations
    pub mod email {
        pub use clearance_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use clearance_adapters::config::*;
    }

    /// Axum integration
    pub mod axum {
        pub use clearance_axum::*;
    }
}

pub use clearance_adapters::{LoginRouter, LoginRouterBuilder, RegexEmailValidator};

// ============================================================================
// Login Service (Main Entry Point)
// ============================================================================

/// Main login service
pub use clearance_service::{LoginService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing collaborator traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use serde_json;
