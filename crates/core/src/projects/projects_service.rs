use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::calculator::calculate_profit;
use crate::errors::Result;
use crate::projects::export::summary_csv;
use crate::projects::projects_model::{
    BranchDraft, ProjectDraft, ProjectNode, SavedProject,
};
use crate::projects::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::projects::tree::build_tree;

/// Orchestrates validation, result computation, and persistence for the
/// project version tree. Path minting and cascade traversal happen inside
/// the repository's transactional write methods.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepositoryTrait>) -> Self {
        ProjectService { repository }
    }
}

#[async_trait]
impl ProjectServiceTrait for ProjectService {
    fn get_project(&self, project_id: &str) -> Result<Option<SavedProject>> {
        self.repository.get_project(project_id)
    }

    fn list_tree(&self) -> Result<Vec<ProjectNode>> {
        let summaries = self.repository.list_summaries()?;
        Ok(build_tree(summaries))
    }

    async fn create_project(&self, draft: ProjectDraft) -> Result<SavedProject> {
        draft.validate()?;
        let result = calculate_profit(&draft.input)?;
        let project = self.repository.insert_root(draft, result).await?;
        debug!(
            "Created root project {} at path {}",
            project.id, project.branch_path
        );
        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: &str,
        draft: ProjectDraft,
    ) -> Result<Option<SavedProject>> {
        draft.validate()?;
        let result = calculate_profit(&draft.input)?;
        self.repository
            .update_project(project_id, draft, result)
            .await
    }

    async fn create_branch(
        &self,
        parent_id: &str,
        draft: BranchDraft,
    ) -> Result<Option<SavedProject>> {
        draft.validate()?;
        let branch = self.repository.insert_branch(parent_id, draft).await?;
        if let Some(ref project) = branch {
            debug!(
                "Branched project {} from {} at path {}",
                project.id, parent_id, project.branch_path
            );
        }
        Ok(branch)
    }

    async fn delete_project(&self, project_id: &str) -> Result<Vec<String>> {
        let deleted = self.repository.delete_cascade(project_id).await?;
        if !deleted.is_empty() {
            debug!(
                "Deleted project {} and {} descendant(s)",
                project_id,
                deleted.len() - 1
            );
        }
        Ok(deleted)
    }

    fn export_csv(&self, project_id: &str) -> Result<Option<String>> {
        match self.repository.get_project(project_id)? {
            Some(project) => Ok(Some(summary_csv(&project.result)?)),
            None => Ok(None),
        }
    }
}
