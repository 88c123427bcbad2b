//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::User;

/// A user as returned by the API, with the derived adult flag.
///
/// Built fresh from a stored [`User`] on every read; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub is_of_age: bool,
}

/// Request body for `POST /users`.
///
/// Fields are optional at the parsing stage so that an incomplete body
/// reaches validation and is reported as a failed creation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required(message = "id is required"))]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(required(message = "age is required"), range(min = 0))]
    pub age: Option<i64>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

impl CreateUserRequest {
    /// Converts a request into a [`User`].
    ///
    /// Returns `None` when a required field is missing; call
    /// [`Validate::validate`] first to find out why.
    pub fn into_user(self) -> Option<User> {
        Some(User::new(self.id?, self.name, self.age?))
    }
}
