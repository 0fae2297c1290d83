//! Framework-agnostic request and response envelopes.
//!
//! The login router only ever sees an [`HttpRequest`] and only ever produces an
//! [`HttpResponse`]. Framework crates translate their own types at the edge:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  clearance_axum: body bytes → HttpRequest│
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  LoginRouter::route                      │
//! │  (validation + collaborator calls)       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  HttpResponse → framework response       │
//! └──────────────────────────────────────────┘
//! ```

use http::StatusCode;
use serde_json::{Map, Value, json};

use crate::{domain::access_token::AccessToken, errors::LoginError};

/// The result of processing a login request, before it is turned into a response.
pub type LoginOutcome = Result<AccessToken, LoginError>;

/// Incoming request envelope.
///
/// The body is untyped. Callers may hand over anything and the router checks
/// that it is a JSON object before reading from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }

    /// A request that carries no body at all.
    pub fn empty() -> Self {
        Self { body: None }
    }
}

impl From<Value> for HttpRequest {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

/// Outgoing response envelope.
///
/// Only constructed through the mapping functions below, so every response the
/// router returns has one of the four known shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status_code: StatusCode,
    body: Option<Value>,
}

impl HttpResponse {
    /// Create a 200 OK response carrying the access token
    pub fn ok(access_token: &AccessToken) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: Some(json!({ "accessToken": access_token })),
        }
    }

    // Only reached for MissingParam and InvalidParam
    fn bad_request(error: &LoginError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: Some(error_body(error)),
        }
    }

    /// Create a 401 Unauthorized response
    pub fn unauthorized() -> Self {
        Self::from(LoginError::Unauthorized)
    }

    /// Create a 500 Internal Server Error response
    ///
    /// The body is the same whatever went wrong.
    pub fn server_error() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some(json!({
                "error": "ServerError",
                "message": "Internal error",
            })),
        }
    }

    pub fn from_outcome(outcome: LoginOutcome) -> Self {
        match outcome {
            Ok(access_token) => Self::ok(&access_token),
            Err(error) => error.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn into_parts(self) -> (StatusCode, Option<Value>) {
        (self.status_code, self.body)
    }
}

impl From<LoginError> for HttpResponse {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::MissingParam(_) | LoginError::InvalidParam(_) => {
                Self::bad_request(&error)
            }
            LoginError::Unauthorized => Self {
                status_code: StatusCode::UNAUTHORIZED,
                body: Some(error_body(&error)),
            },
            LoginError::Server(_) => Self::server_error(),
        }
    }
}

fn error_body(error: &LoginError) -> Value {
    let mut body = Map::new();
    body.insert("error".to_string(), Value::from(error.kind()));
    body.insert("message".to_string(), Value::from(error.to_string()));
    if let Some(field) = error.field() {
        body.insert("field".to_string(), Value::from(field));
    }
    Value::Object(body)
}
