use http::StatusCode;
use thiserror::Error;

use crate::ports::services::{AuthUseCaseError, EmailValidatorError};

/// Why a login request ended in an internal error.
///
/// This never reaches the client; it only exists so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerFault {
    #[error("Request is missing")]
    MissingRequest,
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is not a JSON object")]
    MalformedBody,
    #[error("No email validator configured")]
    MissingEmailValidator,
    #[error("Email validator failed: {0}")]
    EmailValidator(#[source] EmailValidatorError),
    #[error("No auth use case configured")]
    MissingAuthUseCase,
    #[error("Auth use case failed: {0}")]
    AuthUseCase(#[source] AuthUseCaseError),
    #[error("{0} panicked")]
    CollaboratorPanicked(&'static str),
}

/// Every way a login request can fail.
///
/// The `Display` output is what the client sees in the `message` field. The
/// `Server` variant never displays its fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Missing param: {0}")]
    MissingParam(String),
    #[error("Invalid param: {0}")]
    InvalidParam(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal error")]
    Server(#[from] ServerFault),
}

impl LoginError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Stable name of the error kind, used as the `error` member of response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::Unauthorized => "UnauthorizedError",
            Self::Server(_) => "ServerError",
        }
    }

    /// The request field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) => Some(field),
            Self::Unauthorized | Self::Server(_) => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
