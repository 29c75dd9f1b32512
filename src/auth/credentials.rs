//! Credential verification capability and the static-pair implementation.

use subtle::ConstantTimeEq;

/// Capability the HTTP login route depends on.
pub trait CredentialVerifier: Send + Sync {
    /// Whether the supplied pair is valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed credential pair, loaded from configuration.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("BAKIM", "MAXIME")
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok && pass_ok
    }
}

/// Constant-time byte comparison; length mismatch short-circuits, which
/// leaks only the length.
fn constant_time_eq(expected: &[u8], supplied: &[u8]) -> bool {
    if expected.len() != supplied.len() {
        return false;
    }
    expected.ct_eq(supplied).into()
}
