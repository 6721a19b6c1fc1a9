//! SQLite storage implementation for the FBA profit calculator.
//!
//! This crate provides all database-related functionality using Diesel with
//! SQLite. It implements the repository traits defined in `fba-core` and
//! contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for projects and settings
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate where Diesel dependencies exist; `core` and the
//! server work with traits. All writes funnel through a single-writer actor
//! so that each read-then-write repository operation (sibling-segment scan,
//! cascade-delete link scan) executes inside one immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod projects;
pub mod settings;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from fba-core for convenience
pub use fba_core::errors::{DatabaseError, Error, Result};
