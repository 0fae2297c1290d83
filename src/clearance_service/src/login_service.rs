use axum::{Router, routing::post};
use clearance_adapters::{LoginRouter, config::LoginServiceSetting};
use clearance_axum::routes::login;
use clearance_core::{AuthUseCase, EmailValidatorError};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// HTTP service exposing `POST /login`.
pub struct LoginService {
    router: Router,
}

impl LoginService {
    /// Create a new LoginService around an already configured login router
    pub fn new(login_router: LoginRouter) -> Self {
        let router = Router::new()
            .route("/login", post(login))
            .with_state(login_router);

        Self { router }
    }

    /// Create a LoginService whose email validator comes from `settings`
    ///
    /// # Arguments
    /// * `settings` - Loaded service settings
    /// * `auth_use_case` - Credential check used by the login route
    pub fn from_settings<A>(
        settings: &LoginServiceSetting,
        auth_use_case: A,
    ) -> Result<Self, EmailValidatorError>
    where
        A: AuthUseCase + 'static,
    {
        let email_validator = settings.email_validator()?;

        Ok(Self::new(LoginRouter::new(auth_use_case, email_validator)))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(TraceLayer::new_for_http());
        self
    }

    /// Convert the LoginService into a router that can be nested into another application
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the login service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Login service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
