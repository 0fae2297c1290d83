use clearance_core::EmailValidatorError;
use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{CONFIG_FILE, env, prod};
use crate::email::RegexEmailValidator;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Settings for the standalone login service.
///
/// Sources, lowest priority first:
/// built-in defaults, `config/base.json` (optional), then `CLEARANCE__*`
/// environment variables such as `CLEARANCE__APPLICATION__ADDRESS`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginServiceSetting {
    pub application: ApplicationSetting,
    #[serde(default)]
    pub email_validator: EmailValidatorSetting,
    pub telemetry: TelemetrySetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailValidatorSetting {
    /// Overrides the built-in email regex when set.
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySetting {
    pub log_level: String,
}

impl LoginServiceSetting {
    /// Load settings from `.env`, the config file and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is not an error
        dotenvy::dotenv().ok();

        Self::load_with(
            Environment::with_prefix(env::ENV_PREFIX)
                .prefix_separator(env::ENV_SEPARATOR)
                .separator(env::ENV_SEPARATOR),
        )
    }

    /// Load settings with `overrides` layered on top of the defaults and config file.
    pub fn load_with<S>(overrides: S) -> Result<Self, SettingsError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("telemetry.log_level", prod::LOG_LEVEL)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(overrides)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build the email validator described by these settings.
    pub fn email_validator(&self) -> Result<RegexEmailValidator, EmailValidatorError> {
        match &self.email_validator.pattern {
            Some(pattern) => RegexEmailValidator::with_pattern(pattern),
            None => Ok(RegexEmailValidator::new()),
        }
    }
}
