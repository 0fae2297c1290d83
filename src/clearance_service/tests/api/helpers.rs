use std::collections::HashMap;
use std::sync::LazyLock;

use clearance_adapters::{
    LoginRouter, RegexEmailValidator,
    config::{LoginServiceSetting, constants},
};
use clearance_core::{AccessToken, AuthUseCase, AuthUseCaseError, Credentials};
use clearance_service::{LoginService, init_tracing};
use secrecy::ExposeSecret;
use serde_json::Value;
use tokio::net::TcpListener;

pub const KNOWN_EMAIL: &str = "a@b.com";
pub const KNOWN_PASSWORD: &str = "p";
pub const KNOWN_TOKEN: &str = "tok123";

/// Credential table standing in for a real auth use case.
#[derive(Clone, Default)]
pub struct StubAuthUseCase {
    accounts: HashMap<String, (String, String)>,
    fail: bool,
}

impl StubAuthUseCase {
    pub fn with_account(mut self, email: &str, password: &str, token: &str) -> Self {
        self.accounts
            .insert(email.to_string(), (password.to_string(), token.to_string()));
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl AuthUseCase for StubAuthUseCase {
    async fn auth(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthUseCaseError> {
        if self.fail {
            return Err(AuthUseCaseError::UnexpectedError(
                "credential store unavailable".to_string(),
            ));
        }

        Ok(self
            .accounts
            .get(credentials.email())
            .filter(|(password, _)| password == credentials.password().expose_secret())
            .map(|(_, token)| AccessToken::from(token.as_str())))
    }
}

// Set TEST_LOG to see the service's logs while the suite runs
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let settings = LoginServiceSetting::load().expect("Failed to load settings");
        init_tracing(&settings.telemetry).expect("Failed to install tracing");
    }
});

/// Settings as the service would load them, bound to an ephemeral port.
pub fn test_settings(pattern: Option<&str>) -> LoginServiceSetting {
    let mut settings = LoginServiceSetting::load().expect("Failed to load settings");
    settings.application.address = constants::test::APP_ADDRESS.to_string();
    settings.email_validator.pattern = pattern.map(str::to_string);
    settings
}

/// Auth use case whose credential store blows up mid-call.
pub struct PanickingAuthUseCase;

#[async_trait::async_trait]
impl AuthUseCase for PanickingAuthUseCase {
    async fn auth(
        &self,
        _credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthUseCaseError> {
        panic!("credential store poisoned")
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let auth_use_case =
            StubAuthUseCase::default().with_account(KNOWN_EMAIL, KNOWN_PASSWORD, KNOWN_TOKEN);

        Self::with_router(LoginRouter::new(auth_use_case, RegexEmailValidator::new())).await
    }

    pub async fn with_router(router: LoginRouter) -> Self {
        Self::spawn(LoginService::new(router), constants::test::APP_ADDRESS).await
    }

    pub async fn from_settings<A>(settings: &LoginServiceSetting, auth_use_case: A) -> Self
    where
        A: AuthUseCase + 'static,
    {
        let service = LoginService::from_settings(settings, auth_use_case)
            .expect("Failed to build service from settings");

        Self::spawn(service, &settings.application.address).await
    }

    async fn spawn(service: LoginService, address: &str) -> Self {
        LazyLock::force(&TRACING);

        let listener = TcpListener::bind(address)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let _ = tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn json_body(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Could not deserialize response body")
}
