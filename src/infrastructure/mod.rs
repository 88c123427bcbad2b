//! Infrastructure layer implementing the domain's repository interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository and seed loading

pub mod persistence;
