//! # User Service
//!
//! A small CRUD HTTP service for user records, built with Axum on top of an
//! in-memory repository. Every response uses the `{success, data}` envelope.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User entity and repository trait
//! - **Application Layer** ([`application`]) - Service orchestration and messages
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository and seeding
//! - **API Layer** ([`api`]) - Handlers, DTOs, presenter and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_FILE="users.json"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::dto::envelope::Envelope;
    pub use crate::api::dto::user::UserResponse;
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::User;
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
