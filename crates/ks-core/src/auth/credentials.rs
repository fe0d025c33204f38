use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// A single field failure on the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum CredentialError {
    #[error("email is required")]
    EmailRequired,
    #[error("email is invalid")]
    EmailInvalid,
    #[error("password is required")]
    PasswordRequired,
    #[error("password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
}

/// Every field failure found on one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("invalid credentials: {errors:?}")]
pub struct CredentialErrors {
    pub errors: Vec<CredentialError>,
}

impl CredentialErrors {
    pub fn contains(&self, error: &CredentialError) -> bool {
        self.errors.contains(error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check both fields, collecting all failures.
    pub fn validate(&self) -> Result<(), CredentialErrors> {
        let mut errors = Vec::new();

        if self.email.trim().is_empty() {
            errors.push(CredentialError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(CredentialError::EmailInvalid);
        }

        if self.password.trim().is_empty() {
            errors.push(CredentialError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(CredentialError::PasswordTooShort {
                min_len: MIN_PASSWORD_LEN,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CredentialErrors { errors })
        }
    }
}
