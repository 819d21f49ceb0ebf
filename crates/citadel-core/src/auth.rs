//! Operator verification.
//!
//! The controller never stores or compares credentials; it hands them to an
//! [`Authenticator`] and acts on the boolean. The environment-backed
//! implementation ships with no built-in pair: until both variables are set,
//! every attempt fails.

use tracing::warn;

/// Environment variable holding the expected operator name.
pub const USER_VAR: &str = "CITADEL_ADMIN_USER";
/// Environment variable holding the expected secret.
pub const SECRET_VAR: &str = "CITADEL_ADMIN_PASS";

/// Decides whether a username/secret pair identifies a valid operator.
pub trait Authenticator {
    fn verify(&self, username: &str, secret: &str) -> bool;
}

/// Authenticator backed by a pair of environment variables.
pub struct EnvAuthenticator {
    expected: Option<(String, String)>,
}

impl EnvAuthenticator {
    /// Read the expected pair from the environment.
    ///
    /// Logs a warning when either variable is missing or empty; verification
    /// then rejects everything rather than falling back to any default.
    pub fn from_env() -> Self {
        let user = std::env::var(USER_VAR).ok().filter(|v| !v.is_empty());
        let secret = std::env::var(SECRET_VAR).ok().filter(|v| !v.is_empty());
        let expected = match (user, secret) {
            (Some(user), Some(secret)) => Some((user, secret)),
            _ => {
                warn!("{USER_VAR} / {SECRET_VAR} not set; all logins will be rejected");
                None
            }
        };
        Self { expected }
    }

    /// Build with a fixed pair. Intended for tests and embedding.
    pub fn with_pair(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { expected: Some((username.into(), secret.into())) }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }
}

impl Authenticator for EnvAuthenticator {
    fn verify(&self, username: &str, secret: &str) -> bool {
        match &self.expected {
            Some((user, pass)) => username.eq_ignore_ascii_case(user) && secret == pass,
            None => false,
        }
    }
}
