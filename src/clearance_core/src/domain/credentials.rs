use secrecy::Secret;

/// Email and password pair extracted from a login request body.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}
