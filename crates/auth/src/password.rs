use super::*;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::Version;
use argon2::password_hash::SaltString;

/// One-way password scheme the [`Authenticator`] composes.
pub trait Scheme: Clone + Send + Sync + 'static {
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    fn verify(&self, password: &str, hashword: &str) -> bool;
}

/// Argon2id password hasher with a tunable work factor.
///
/// Output is a PHC string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) that
/// carries its own parameters, so [`Hasher::verify`] keeps accepting hashes
/// produced before the work factor was changed.
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    params: Params,
}

impl Hasher {
    /// Memory cost in KiB, iteration count, and degree of parallelism.
    pub fn new(memory: u32, passes: u32, lanes: u32) -> Result<Self, AuthError> {
        Params::new(memory, passes, lanes, None)
            .map(|params| Self { params })
            .map_err(AuthError::hashing)
    }
    pub fn params(&self) -> &Params {
        &self.params
    }
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = salt()?;
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(AuthError::hashing)
    }
    pub fn verify(&self, password: &str, hashword: &str) -> bool {
        PasswordHash::new(hashword)
            .ok()
            .as_ref()
            .map(|hash| {
                self.argon2()
                    .verify_password(password.as_bytes(), hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Scheme for Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Hasher::hash(self, password)
    }
    fn verify(&self, password: &str, hashword: &str) -> bool {
        Hasher::verify(self, password, hashword)
    }
}

fn salt() -> Result<SaltString, AuthError> {
    use rand::Rng;
    let ref mut bytes = [0u8; kw_core::SALT_BYTES];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).map_err(AuthError::hashing)
}
