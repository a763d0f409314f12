use super::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

/// Process-local [`UserStore`]. Nothing survives a restart.
///
/// Reads share the lock; every mutation takes it exclusively for the single
/// map operation, and records are replaced whole.
#[derive(Debug, Default)]
pub struct Memory {
    users: RwLock<HashMap<String, User>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserStore for Memory {
    async fn get(&self, username: &str) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }
    async fn set(&self, user: User) {
        self.users
            .write()
            .await
            .insert(user.username().to_string(), user);
    }
    async fn insert(&self, user: User) -> bool {
        match self.users.write().await.entry(user.username().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn user(name: &str, hash: &str) -> User {
        User::new(name.to_string(), hash.to_string())
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let store = Memory::new();
        assert_eq!(store.get("ghost").await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = Memory::new();
        store.set(user("alice", "h1")).await;
        assert_eq!(store.get("alice").await, Some(user("alice", "h1")));
        assert_eq!(store.get("Alice").await, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = Memory::new();
        store.set(user("alice", "h1")).await;
        store.set(user("alice", "h2")).await;
        assert_eq!(store.get("alice").await.unwrap().hashword(), "h2");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn insert_keeps_first_record() {
        let store = Memory::new();
        assert!(store.insert(user("alice", "h1")).await);
        assert!(!store.insert(user("alice", "h2")).await);
        assert_eq!(store.get("alice").await.unwrap().hashword(), "h1");
    }

    #[tokio::test]
    async fn shared_through_arc() {
        let store = Arc::new(Memory::new());
        let other = store.clone();
        assert!(other.insert(user("bob", "h")).await);
        assert_eq!(UserStore::get(&store, "bob").await, Some(user("bob", "h")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reads_and_writes() {
        let store = Arc::new(Memory::new());
        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let store: &Memory = &store;
                for j in 0..64 {
                    let name = format!("user{}", j % 8);
                    let hash = format!("{}-{}", name, i);
                    store.set(User::new(name.clone(), hash)).await;
                    if let Some(found) = store.get(&name).await {
                        // whole records only: hash always belongs to its own key
                        assert!(found.hashword().starts_with(&format!("{}-", found.username())));
                    }
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 8);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_have_one_winner() {
        let store = Arc::new(Memory::new());
        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let store: &Memory = &store;
                store.insert(user("alice", &i.to_string())).await
            }));
        }
        let mut winners = 0;
        for task in tasks {
            if task.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
