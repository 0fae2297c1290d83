use std::sync::LazyLock;

use clearance_core::{EmailValidator, EmailValidatorError};
use regex::Regex;

/// Local part of RFC 5322 "atext" characters, followed by one or more DNS labels.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

const MAX_EMAIL_LENGTH: usize = 254;

static DEFAULT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_EMAIL_PATTERN).expect("DEFAULT_EMAIL_PATTERN is a valid regex")
});

/// Email validator backed by a regular expression.
#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_EMAIL_REGEX.clone(),
        }
    }

    /// Build a validator from a custom pattern, e.g. one read from configuration.
    pub fn with_pattern(pattern: &str) -> Result<Self, EmailValidatorError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| EmailValidatorError::InvalidPattern(e.to_string()))?;

        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexEmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailValidator for RegexEmailValidator {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(email.len() <= MAX_EMAIL_LENGTH && self.pattern.is_match(email))
    }
}
