//! Repository implementations.
//!
//! - [`InMemoryUserRepository`] - Process-local user store
//! - [`load_seed_file`] - Initial contents from a JSON file

mod in_memory_user_repository;
mod seed;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use seed::load_seed_file;
