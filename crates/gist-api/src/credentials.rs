//! Credential configuration for the remote snippet service.
//!
//! The service requires a principal name and a secret token, read once from
//! the environment into an explicit value handed to the client constructor.
//! A missing variable is a configuration error reported before any network
//! call is attempted; the client never falls back to anonymous access.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the account name.
pub const USERNAME_VAR: &str = "GIT_USERNAME";

/// Environment variable holding the access token.
pub const TOKEN_VAR: &str = "GIT_TOKEN";

/// Configuration error raised when credential material is absent.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The account name variable is unset or empty.
    #[error("{USERNAME_VAR} is not set")]
    MissingUsername,

    /// The token variable is unset or empty.
    #[error("{TOKEN_VAR} is not set")]
    MissingToken,
}

/// Credential material for the remote service.
///
/// The token is wrapped in [`SecretString`] so it cannot leak through
/// `Debug` output or accidental logging.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    token: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: SecretString::from(token.into()),
        }
    }

    /// Load credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let username = std::env::var(USERNAME_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(CredentialsError::MissingUsername)?;
        let token = std::env::var(TOKEN_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(CredentialsError::MissingToken)?;
        Ok(Self::new(username, token))
    }

    /// The account name presented to the service.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The token presented to the service.
    ///
    /// Callers must be careful not to log or display the returned value.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}
