//! Core domain entities.
//!
//! - [`User`] - A stored user record

pub mod user;

pub use user::{ADULT_AGE, User};
