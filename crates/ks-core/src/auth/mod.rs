//! Auth domain models
//!
//! Sign-in form rules checked by the login handler.

mod credentials;

pub use credentials::{CredentialError, CredentialErrors, Credentials, MIN_PASSWORD_LEN};

/// Prefix of the locally generated mock session token.
pub const MOCK_TOKEN_PREFIX: &str = "mock-token-";
