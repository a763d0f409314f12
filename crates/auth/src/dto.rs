use super::*;
use serde::Deserialize;

/// Username and plaintext password as posted to `/register` and `/login`.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Current and replacement password as posted to `/change-password`.
/// The replacement is also accepted as `newPassword`.
#[derive(Clone, Deserialize)]
pub struct PasswordChange {
    pub password: String,
    #[serde(alias = "newPassword")]
    pub new_password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl PasswordChange {
    pub fn new(password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            new_password: new_password.into(),
        }
    }
}

impl TryFrom<&[u8]> for Credentials {
    type Error = AuthError;
    fn try_from(body: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(body).map_err(|_| AuthError::MalformedInput)
    }
}

impl TryFrom<&[u8]> for PasswordChange {
    type Error = AuthError;
    fn try_from(body: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(body).map_err(|_| AuthError::MalformedInput)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange")
            .field("password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}
