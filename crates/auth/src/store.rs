use super::*;
use std::sync::Arc;

/// Storage capability the [`Authenticator`] is written against.
/// Records are keyed by [`User::username`].
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Record for exactly this username, if one exists.
    async fn get(&self, username: &str) -> Option<User>;
    /// Insert or replace. Last writer wins; readers see the old or the new record, never a mix.
    async fn set(&self, user: User);
    /// Check-and-set: store only if the username is absent. Returns whether it was stored.
    async fn insert(&self, user: User) -> bool;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore,
{
    async fn get(&self, username: &str) -> Option<User> {
        self.as_ref().get(username).await
    }
    async fn set(&self, user: User) {
        self.as_ref().set(user).await
    }
    async fn insert(&self, user: User) -> bool {
        self.as_ref().insert(user).await
    }
}
