//! User management service.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::messages;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service orchestrating user operations over a [`UserRepository`].
///
/// Holds no state of its own; the repository is the single source of truth.
/// Any repository implementation can be injected, including test doubles.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository faults.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on repository faults.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        debug!(id, "Looking up user");

        self.repository
            .find_one(id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::USER_NOT_FOUND))
    }

    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with the creation failure message if
    /// the repository rejects the record or faults.
    pub async fn create_user(&self, user: User) -> Result<(), AppError> {
        let id = user.id;

        match self.repository.save(user).await {
            Ok(true) => {
                info!(id, "User created");
                Ok(())
            }
            Ok(false) => {
                warn!(id, "Repository rejected user");
                Err(AppError::internal(messages::USER_CREATE_FAILED))
            }
            Err(e) => {
                error!(id, error = %e, "Failed to save user");
                Err(AppError::internal(messages::USER_CREATE_FAILED))
            }
        }
    }

    /// Removes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with the removal failure message if no
    /// record matched or the repository faults.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        match self.repository.delete(id).await {
            Ok(true) => {
                info!(id, "User deleted");
                Ok(())
            }
            Ok(false) => {
                warn!(id, "No user to delete");
                Err(AppError::internal(messages::USER_DELETE_FAILED))
            }
            Err(e) => {
                error!(id, error = %e, "Failed to delete user");
                Err(AppError::internal(messages::USER_DELETE_FAILED))
            }
        }
    }

    /// Number of stored users, used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository faults.
    pub async fn count_users(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
