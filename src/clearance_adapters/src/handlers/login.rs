//! Framework-agnostic login handler.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use clearance_core::{
    AuthUseCase, Credentials, EmailValidator, HttpRequest, HttpResponse, LoginError, LoginOutcome,
    ServerFault,
};
use futures_util::FutureExt;
use secrecy::Secret;
use serde_json::{Map, Value};

const EMAIL_FIELD: &str = "email";
const PASSWORD_FIELD: &str = "password";

/// Login router - validates a login request and authenticates it.
///
/// The router holds shared handles to its two collaborators and no other
/// state, so a single instance can serve any number of concurrent requests.
/// Either collaborator may be left unset; the request that needs it then ends
/// with a 500 response instead of a panic.
///
/// Checks run in a fixed order and the first failure decides the response:
///
/// 1. request and body present, body is a JSON object (500 otherwise)
/// 2. `email` present (400)
/// 3. `email` accepted by the [`EmailValidator`] (400, or 500 if the validator is unset or fails)
/// 4. `password` present (400)
/// 5. [`AuthUseCase`] returns a non-empty token (401, or 500 if the use case is unset or fails)
///
/// A collaborator that panics is treated like one that returned an error.
#[derive(Clone, Default)]
pub struct LoginRouter {
    auth_use_case: Option<Arc<dyn AuthUseCase>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouter {
    pub fn new<A, V>(auth_use_case: A, email_validator: V) -> Self
    where
        A: AuthUseCase + 'static,
        V: EmailValidator + 'static,
    {
        Self::builder()
            .with_auth_use_case(auth_use_case)
            .with_email_validator(email_validator)
            .build()
    }

    pub fn builder() -> LoginRouterBuilder {
        LoginRouterBuilder::default()
    }

    /// Handle a login request.
    ///
    /// Never fails: every problem, including missing collaborators,
    /// collaborator errors and collaborator panics, is turned into an [`HttpResponse`].
    #[tracing::instrument(name = "LoginRouter::route", skip_all)]
    pub async fn route(&self, request: Option<HttpRequest>) -> HttpResponse {
        let outcome = self.login(request).await;

        match &outcome {
            Ok(_) => tracing::info!("Login succeeded"),
            Err(LoginError::Server(fault)) => {
                tracing::error!(error = %fault, "Login failed with an internal error")
            }
            Err(error) => tracing::info!(error = %error, "Login rejected"),
        }

        HttpResponse::from_outcome(outcome)
    }

    async fn login(&self, request: Option<HttpRequest>) -> LoginOutcome {
        let request = request.ok_or(ServerFault::MissingRequest)?;
        let body = request.body.ok_or(ServerFault::MissingBody)?;
        let Value::Object(body) = body else {
            return Err(ServerFault::MalformedBody.into());
        };

        let email = required_field(&body, EMAIL_FIELD)
            .ok_or_else(|| LoginError::missing_param(EMAIL_FIELD))?;

        self.validate_email(email).await?;

        let password = required_field(&body, PASSWORD_FIELD)
            .ok_or_else(|| LoginError::missing_param(PASSWORD_FIELD))?;

        let credentials = Credentials::new(email, Secret::new(password.to_owned()));

        self.authenticate(&credentials).await
    }

    async fn validate_email(&self, email: &str) -> Result<(), LoginError> {
        let email_validator = self
            .email_validator
            .as_ref()
            .ok_or(ServerFault::MissingEmailValidator)?;

        let is_valid = AssertUnwindSafe(email_validator.is_valid(email))
            .catch_unwind()
            .await
            .map_err(|_| ServerFault::CollaboratorPanicked("Email validator"))?
            .map_err(ServerFault::EmailValidator)?;

        if !is_valid {
            tracing::debug!("Email rejected by validator");
            return Err(LoginError::invalid_param(EMAIL_FIELD));
        }

        Ok(())
    }

    async fn authenticate(&self, credentials: &Credentials) -> LoginOutcome {
        let auth_use_case = self
            .auth_use_case
            .as_ref()
            .ok_or(ServerFault::MissingAuthUseCase)?;

        let access_token = AssertUnwindSafe(auth_use_case.auth(credentials))
            .catch_unwind()
            .await
            .map_err(|_| ServerFault::CollaboratorPanicked("Auth use case"))?
            .map_err(ServerFault::AuthUseCase)?;

        access_token
            .filter(|token| !token.is_empty())
            .ok_or(LoginError::Unauthorized)
    }
}

/// Builder for [`LoginRouter`], for when a collaborator is optional or shared.
#[derive(Default)]
pub struct LoginRouterBuilder {
    auth_use_case: Option<Arc<dyn AuthUseCase>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouterBuilder {
    pub fn with_auth_use_case<A>(mut self, auth_use_case: A) -> Self
    where
        A: AuthUseCase + 'static,
    {
        self.auth_use_case = Some(Arc::new(auth_use_case));
        self
    }

    pub fn with_email_validator<V>(mut self, email_validator: V) -> Self
    where
        V: EmailValidator + 'static,
    {
        self.email_validator = Some(Arc::new(email_validator));
        self
    }

    pub fn build(self) -> LoginRouter {
        LoginRouter {
            auth_use_case: self.auth_use_case,
            email_validator: self.email_validator,
        }
    }
}

// A field counts as present only if it is a non-empty JSON string.
fn required_field<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
