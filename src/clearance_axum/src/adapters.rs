//! Axum framework adapters for the login router.
//!
//! The router works on `clearance_core::HttpRequest` and
//! `clearance_core::HttpResponse`. The newtype wrappers here convert between
//! those envelopes and Axum's own types without violating the orphan rule.

use std::convert::Infallible;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use clearance_core::{HttpRequest, HttpResponse};
use serde_json::Value;

/// Extractor turning the raw request body into an [`HttpRequest`].
///
/// It never rejects. An empty body, a body that cannot be read and a body
/// that is not valid JSON all become a request without a body, which the
/// router answers with a 500.
#[derive(Debug)]
pub struct AxumLoginRequest(pub HttpRequest);

impl<S> FromRequest<S> for AxumLoginRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = match Bytes::from_request(req, state).await {
            Ok(bytes) => http_request(&bytes),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read login request body");
                HttpRequest::empty()
            }
        };

        Ok(Self(request))
    }
}

/// Parse a raw body into an [`HttpRequest`].
pub fn http_request(bytes: &[u8]) -> HttpRequest {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return HttpRequest::empty();
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(body) => HttpRequest::new(body),
        Err(e) => {
            tracing::debug!(error = %e, "Login request body is not valid JSON");
            HttpRequest::empty()
        }
    }
}

/// Newtype wrapper implementing [`IntoResponse`] for [`HttpResponse`].
#[derive(Debug)]
pub struct AxumResponse(pub HttpResponse);

impl From<HttpResponse> for AxumResponse {
    fn from(response: HttpResponse) -> Self {
        AxumResponse(response)
    }
}

impl IntoResponse for AxumResponse {
    fn into_response(self) -> Response {
        match self.0.into_parts() {
            (status, Some(body)) => (status, Json(body)).into_response(),
            (status, None) => status.into_response(),
        }
    }
}
