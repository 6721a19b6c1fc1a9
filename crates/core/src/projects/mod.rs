//! Project version tree - domain models, services, and traits.

pub mod branch_path;
mod export;
mod projects_model;
mod projects_service;
mod projects_traits;
mod tree;

pub use branch_path::{alpha_to_index, index_to_alpha, next_segment};
pub use export::summary_csv;
pub use projects_model::{BranchDraft, ProjectDraft, ProjectNode, ProjectSummary, SavedProject};
pub use projects_service::ProjectService;
pub use projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
pub use tree::{build_tree, collect_subtree};
