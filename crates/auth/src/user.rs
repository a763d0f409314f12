/// Stored account: a username and the Argon2 hash of its password.
/// The plaintext never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    username: String,
    hashword: String,
}

impl User {
    pub fn new(username: String, hashword: String) -> Self {
        Self { username, hashword }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn hashword(&self) -> &str {
        &self.hashword
    }
}
