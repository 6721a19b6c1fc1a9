//! FBA Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the FBA profit calculator:
//! the pure calculation engine, the project version tree, and the settings
//! domain. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod money;
pub mod projects;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
