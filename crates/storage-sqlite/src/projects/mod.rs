//! SQLite storage implementation for the project version tree.

mod model;
mod repository;

pub use model::{ProjectDB, ProjectSummaryDB};
pub use repository::ProjectRepository;
