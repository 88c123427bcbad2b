//! In-memory implementation of [`UserRepository`].

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// User store living for the lifetime of the process.
///
/// Records are kept in insertion order. The write lock serializes `save`
/// and `delete`, which keeps ids unique under concurrent requests.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users`.
    ///
    /// Callers are responsible for passing unique ids; see
    /// [`crate::infrastructure::persistence::load_seed_file`].
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

fn poisoned() -> AppError {
    error!("User store lock poisoned");
    AppError::unexpected()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.clone())
    }

    async fn find_one(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn save(&self, user: User) -> Result<bool, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        if users.iter().any(|u| u.id == user.id) {
            debug!(id = user.id, "Rejecting user with duplicate id");
            return Ok(false);
        }

        users.push(user);
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.len())
    }
}
