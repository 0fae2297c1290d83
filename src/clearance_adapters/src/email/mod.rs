pub mod regex_email_validator;

pub use regex_email_validator::{DEFAULT_EMAIL_PATTERN, RegexEmailValidator};
