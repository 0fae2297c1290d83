pub mod domain;
pub mod errors;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{access_token::AccessToken, credentials::Credentials};

pub use errors::{LoginError, ServerFault};

pub use ports::services::{AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError};

pub use http_abstraction::{HttpRequest, HttpResponse, LoginOutcome};
