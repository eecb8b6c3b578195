use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{seed_users, CreateUser, IdStrategy, UpdateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// First user whose id matches
    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>>;

    /// Append a new user and return it with its assigned id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Update name/email of the first user whose id matches
    async fn update(&self, id: u64, input: UpdateUser) -> UserResult<User>;

    /// Remove the first user whose id matches
    async fn delete(&self, id: u64) -> UserResult<bool>;

    /// Number of stored users
    async fn count(&self) -> UserResult<usize>;
}

#[derive(Debug)]
struct Store {
    users: Vec<User>,
    strategy: IdStrategy,
    /// Next id handed out under `IdStrategy::Sequence`
    next_id: u64,
}

impl Store {
    fn assign_id(&mut self) -> u64 {
        match self.strategy {
            IdStrategy::Length => self.users.len() as u64 + 1,
            IdStrategy::Sequence => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// In-memory implementation of UserRepository.
///
/// The whole collection sits behind one lock, every operation holds it for its
/// full read-modify-write so no two operations interleave.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Empty repository using the default id strategy
    pub fn new() -> Self {
        Self::with_users(IdStrategy::default(), Vec::new())
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self::with_users(strategy, Vec::new())
    }

    /// Repository pre-populated with `users`, kept in the given order
    pub fn with_users(strategy: IdStrategy, users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            store: Arc::new(RwLock::new(Store {
                users,
                strategy,
                next_id,
            })),
        }
    }

    /// Repository holding the two startup records
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_users(strategy, seed_users())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.clone())
    }

    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        let id = store.assign_id();
        if store.position(id).is_some() {
            tracing::warn!(user_id = id, "Assigned id already in use");
        }

        let user = User::new(id, input);
        store.users.push(user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, id: u64, input: UpdateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::NotFound(Some(id)))?;
        user.apply_update(input);
        let updated = user.clone();

        tracing::info!(user_id = id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        match store.position(id) {
            Some(index) => {
                store.users.remove(index);
                tracing::info!(user_id = id, "Deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> UserResult<usize> {
        let store = self.store.read().await;
        Ok(store.users.len())
    }
}
