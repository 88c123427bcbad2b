//! Uniform response wrapper.

use serde::{Deserialize, Serialize};

/// Every response body has this shape: `{"success": bool, "data": T}`.
///
/// `data` is a user, a list of users, or a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl Envelope<String> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: message.into(),
        }
    }
}
