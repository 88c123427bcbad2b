//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and shapes every
//! outcome into the `{success, data}` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`presenter`] - Stored user to response record mapping
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and panic recovery
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod presenter;
pub mod routes;
