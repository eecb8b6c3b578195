use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for the user directory.
///
/// Ids arrive as `Option<u64>`: `None` means the client sent something that is
/// not a number, which is reported exactly like an unknown id.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users in insertion order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Option<u64>) -> UserResult<User> {
        let id = id.ok_or(UserError::NotFound(None))?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(Some(id)))
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    /// Update name and/or email, empty values keep the stored ones
    pub async fn update_user(&self, id: Option<u64>, input: UpdateUser) -> UserResult<User> {
        let id = id.ok_or(UserError::NotFound(None))?;
        self.repository.update(id, input).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: Option<u64>) -> UserResult<()> {
        let id = id.ok_or(UserError::NotFound(None))?;
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(Some(id)));
        }
        Ok(())
    }
}
