//! Repository trait for user records.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user records.
///
/// Expected outcomes are part of the return value: a lookup miss is
/// `Ok(None)`, a rejected save or a delete with no matching record is
/// `Ok(false)`. The `Err` arm is only for unexpected internal faults.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns all stored users. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn find_one(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Stores a new user. Returns `false` if the record is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be written.
    async fn save(&self, user: User) -> Result<bool, AppError>;

    /// Removes a user by id. Returns `false` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be written.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn count(&self) -> Result<usize, AppError>;
}
