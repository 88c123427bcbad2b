//! Handlers for user endpoints.
//!
//! Each handler delegates to [`crate::application::services::UserService`],
//! presents read results and wraps every outcome in an [`Envelope`].
//! Failures are rendered by [`AppError`]'s `IntoResponse` impl.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::warn;
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::presenter::{present_user, present_users};
use crate::application::messages;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 1, "name": "Naruto", "age": 10, "isOfAge": false }
///   ]
/// }
/// ```
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<UserResponse>>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(Envelope::success(present_users(users))))
}

/// Fetches one user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this id. A non-integer id cannot match any
/// user and is reported the same way.
pub async fn get_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<UserResponse>>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        warn!(error = %rejection, "Invalid user id");
        AppError::not_found(messages::USER_NOT_FOUND)
    })?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(Envelope::success(present_user(user))))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "id": 4, "name": "Sakura", "age": 16 }
/// ```
///
/// # Errors
///
/// Returns 500 with the creation failure message if the body is not valid
/// JSON, fails validation, or the repository rejects the record.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<String>>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Unreadable user payload");
        AppError::internal(messages::USER_CREATE_FAILED)
    })?;

    if let Err(errors) = payload.validate() {
        warn!(error = %errors, "Invalid user payload");
        return Err(AppError::internal(messages::USER_CREATE_FAILED));
    }

    let user = payload
        .into_user()
        .ok_or_else(|| AppError::internal(messages::USER_CREATE_FAILED))?;

    state.user_service.create_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(messages::USER_CREATED.to_string())),
    ))
}

/// Deletes a user by id.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 500 with the removal failure message if no user has this id.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<String>>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        warn!(error = %rejection, "Invalid user id");
        AppError::internal(messages::USER_DELETE_FAILED)
    })?;

    state.user_service.delete_user(id).await?;

    Ok(Json(Envelope::success(messages::USER_DELETED.to_string())))
}
