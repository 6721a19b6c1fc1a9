//! Repository and service traits for the project version tree.

use async_trait::async_trait;

use crate::calculator::FbaCalculationResult;
use crate::errors::Result;
use crate::projects::projects_model::{BranchDraft, ProjectDraft, ProjectNode, ProjectSummary, SavedProject};

/// Repository trait for persisted projects.
///
/// Each write method is a single atomic unit of work: the sibling-segment
/// scan of `insert_root`/`insert_branch` and the link scan of
/// `delete_cascade` run in the same transaction as the mutation, so two
/// concurrent branches of one parent can never receive the same segment.
/// "Not found" is the `None`/empty shape, never an error.
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    /// Load one project with its snapshots.
    fn get_project(&self, project_id: &str) -> Result<Option<SavedProject>>;

    /// Load all summaries in ascending branch-path order.
    fn list_summaries(&self) -> Result<Vec<ProjectSummary>>;

    /// Insert a new root; the repository mints the next root segment and a
    /// fresh identity.
    async fn insert_root(
        &self,
        draft: ProjectDraft,
        result: FbaCalculationResult,
    ) -> Result<SavedProject>;

    /// Replace name/description/input/result on an existing node and bump
    /// `updated_at`. Id, parent and branch path never change.
    async fn update_project(
        &self,
        project_id: &str,
        draft: ProjectDraft,
        result: FbaCalculationResult,
    ) -> Result<Option<SavedProject>>;

    /// Insert a child of `parent_id` carrying a verbatim copy of the
    /// parent's input/result snapshots.
    async fn insert_branch(
        &self,
        parent_id: &str,
        draft: BranchDraft,
    ) -> Result<Option<SavedProject>>;

    /// Delete the node and every transitive descendant in one batch,
    /// returning the deleted ids (empty when the target does not exist).
    async fn delete_cascade(&self, project_id: &str) -> Result<Vec<String>>;
}

/// Service trait for the project version tree.
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    fn get_project(&self, project_id: &str) -> Result<Option<SavedProject>>;

    fn list_tree(&self) -> Result<Vec<ProjectNode>>;

    async fn create_project(&self, draft: ProjectDraft) -> Result<SavedProject>;

    async fn update_project(
        &self,
        project_id: &str,
        draft: ProjectDraft,
    ) -> Result<Option<SavedProject>>;

    async fn create_branch(
        &self,
        parent_id: &str,
        draft: BranchDraft,
    ) -> Result<Option<SavedProject>>;

    async fn delete_project(&self, project_id: &str) -> Result<Vec<String>>;

    /// Flattened 4-row summary export (`metric,value_usd,value_cny`).
    fn export_csv(&self, project_id: &str) -> Result<Option<String>>;
}
