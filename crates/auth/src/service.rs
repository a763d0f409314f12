use super::*;
use std::sync::Arc;
use std::sync::OnceLock;

/// Plaintext hashed once per service to give unknown-user logins a real hash to verify against.
const DECOY: &str = "keyward-decoy-password";

/// Registration, login and password change over an injected store and
/// password scheme.
///
/// Owns the domain invariants: usernames are cookie-safe and unique, only
/// hashes reach the store, and a failed login never says which half of the
/// credentials was wrong.
pub struct Authenticator<S, H = Hasher> {
    store: S,
    hasher: H,
    decoy: Arc<OnceLock<String>>,
}

impl<S, H> Authenticator<S, H>
where
    S: UserStore,
    H: Scheme,
{
    pub fn new(store: S, hasher: H) -> Self {
        Self {
            store,
            hasher,
            decoy: Arc::default(),
        }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Create an account. The atomic insert settles races between concurrent
    /// registrations of one username: the first record stays.
    pub async fn register(&self, credentials: Credentials) -> Result<(), AuthError> {
        let Credentials { username, password } = credentials;
        if !Session::admits(&username) {
            log::debug!("[auth] register {:?} rejected: not cookie-safe", username);
            return Err(AuthError::MalformedInput);
        }
        if self.store.get(&username).await.is_some() {
            log::debug!("[auth] register {} rejected: taken", username);
            return Err(AuthError::DuplicateUser);
        }
        let hashword = self.hash(password).await?;
        if !self.store.insert(User::new(username.clone(), hashword)).await {
            log::debug!("[auth] register {} lost race", username);
            return Err(AuthError::DuplicateUser);
        }
        log::info!("[auth] registered {}", username);
        Ok(())
    }

    /// Check credentials and issue a session.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let Credentials { username, password } = credentials;
        let user = self.store.get(&username).await;
        let hashword = user.as_ref().map(|u| u.hashword().to_string());
        match (self.verify(password, hashword).await, user) {
            (true, Some(user)) => {
                log::info!("[auth] login {}", username);
                Ok(Session::issue(&user))
            }
            _ => {
                log::warn!("[auth] login {} rejected", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Replace the password of the session's user after re-checking the current one.
    pub async fn change_password(
        &self,
        session: &Session,
        change: PasswordChange,
    ) -> Result<(), AuthError> {
        let PasswordChange {
            password,
            new_password,
        } = change;
        let user = self.store.get(session.username()).await;
        let hashword = user.as_ref().map(|u| u.hashword().to_string());
        let user = match (self.verify(password, hashword).await, user) {
            (true, Some(user)) => user,
            _ => {
                log::warn!("[auth] password change for {} rejected", session);
                return Err(AuthError::InvalidCredentials);
            }
        };
        let hashword = self.hash(new_password).await?;
        self.store
            .set(User::new(user.username().to_string(), hashword))
            .await;
        log::info!("[auth] password changed for {}", session);
        Ok(())
    }

    async fn hash(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(AuthError::hashing)?
    }

    /// Verify on the blocking pool. With no stored hash, burn the same work
    /// against the decoy and report false.
    async fn verify(&self, password: String, hashword: Option<String>) -> bool {
        let hasher = self.hasher.clone();
        let decoy = self.decoy.clone();
        tokio::task::spawn_blocking(move || match hashword {
            Some(ref hashword) => hasher.verify(&password, hashword),
            None => {
                let decoy = decoy.get_or_init(|| hasher.hash(DECOY).unwrap_or_default());
                let _ = hasher.verify(&password, decoy);
                false
            }
        })
        .await
        .unwrap_or(false)
    }
}
