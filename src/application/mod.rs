//! Application layer services implementing business logic.
//!
//! Services consume repository traits and translate repository outcomes
//! into the results HTTP handlers render.
//!
//! - [`services::user_service::UserService`] - User listing, lookup, creation and removal
//! - [`messages`] - User-facing response messages

pub mod messages;
pub mod services;
