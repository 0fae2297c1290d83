use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{access_token::AccessToken, credentials::Credentials};

// EmailValidator port trait and errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailValidatorError {
    #[error("Invalid email pattern: {0}")]
    InvalidPattern(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for syntactic email validation.
///
/// Implementations that can answer synchronously simply return without
/// awaiting anything. An `Err` means the validator itself is broken and is
/// reported to the client as an internal error, never as a bad email.
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

#[async_trait]
impl<T: EmailValidator + ?Sized> EmailValidator for Arc<T> {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        (**self).is_valid(email).await
    }
}

// AuthUseCase port trait and errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthUseCaseError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for credential verification.
///
/// Returns `Ok(None)` (or an empty token) when the credentials are wrong.
/// `Err` is reserved for failures of the use case itself.
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    async fn auth(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthUseCaseError>;
}

#[async_trait]
impl<T: AuthUseCase + ?Sized> AuthUseCase for Arc<T> {
    async fn auth(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthUseCaseError> {
        (**self).auth(credentials).await
    }
}
