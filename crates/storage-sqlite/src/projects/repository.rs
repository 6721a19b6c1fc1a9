use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use super::model::{ProjectDB, ProjectSummaryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::projects;
use fba_core::calculator::FbaCalculationResult;
use fba_core::projects::{
    collect_subtree, next_segment, BranchDraft, ProjectDraft, ProjectRepositoryTrait,
    ProjectSummary, SavedProject,
};
use fba_core::Result;

pub struct ProjectRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProjectRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProjectRepository { pool, writer }
    }
}

fn load_project(
    conn: &mut SqliteConnection,
    project_id: &str,
) -> std::result::Result<Option<ProjectDB>, StorageError> {
    projects::table
        .find(project_id)
        .first::<ProjectDB>(conn)
        .optional()
        .map_err(StorageError::from)
}

#[async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    fn get_project(&self, project_id: &str) -> Result<Option<SavedProject>> {
        let mut conn = get_connection(&self.pool)?;
        let row = load_project(&mut conn, project_id)?;
        row.map(SavedProject::try_from)
            .transpose()
            .map_err(Into::into)
    }

    fn list_summaries(&self) -> Result<Vec<ProjectSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = projects::table
            .select(ProjectSummaryDB::as_select())
            .order(projects::branch_path.asc())
            .load::<ProjectSummaryDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| ProjectSummary::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn insert_root(
        &self,
        draft: ProjectDraft,
        result: FbaCalculationResult,
    ) -> Result<SavedProject> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavedProject> {
                // Sibling scan and insert share the writer transaction, so
                // two concurrent roots can never mint the same segment.
                let root_paths: Vec<String> = projects::table
                    .filter(projects::parent_id.is_null())
                    .select(projects::branch_path)
                    .load::<String>(conn)
                    .map_err(StorageError::from)?;
                let segment = next_segment(&root_paths);

                let record = ProjectDB::from_parts(
                    Uuid::new_v4().to_string(),
                    draft.name,
                    draft.description,
                    None,
                    segment,
                    &draft.input,
                    &result,
                    Utc::now(),
                )?;
                diesel::insert_into(projects::table)
                    .values(&record)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(SavedProject::try_from(record)?)
            })
            .await
    }

    async fn update_project(
        &self,
        project_id: &str,
        draft: ProjectDraft,
        result: FbaCalculationResult,
    ) -> Result<Option<SavedProject>> {
        let project_id = project_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Option<SavedProject>> {
                    let existing = match load_project(conn, &project_id)? {
                        Some(row) => row,
                        None => return Ok(None),
                    };

                    let input_json =
                        serde_json::to_string(&draft.input).map_err(StorageError::from)?;
                    let result_json =
                        serde_json::to_string(&result).map_err(StorageError::from)?;
                    diesel::update(projects::table.find(&existing.id))
                        .set((
                            projects::name.eq(draft.name),
                            projects::description.eq(draft.description),
                            projects::input_json.eq(input_json),
                            projects::result_json.eq(result_json),
                            projects::updated_at.eq(Utc::now().to_rfc3339()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let updated = projects::table
                        .find(&existing.id)
                        .first::<ProjectDB>(conn)
                        .map_err(StorageError::from)?;
                    Ok(Some(SavedProject::try_from(updated)?))
                },
            )
            .await
    }

    async fn insert_branch(
        &self,
        parent_id: &str,
        draft: BranchDraft,
    ) -> Result<Option<SavedProject>> {
        let parent_id = parent_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Option<SavedProject>> {
                    let parent = match load_project(conn, &parent_id)? {
                        Some(row) => row,
                        None => return Ok(None),
                    };

                    // The sibling pool is the text after the last '-' of each
                    // existing child path.
                    let sibling_paths: Vec<String> = projects::table
                        .filter(projects::parent_id.eq(&parent_id))
                        .select(projects::branch_path)
                        .load::<String>(conn)
                        .map_err(StorageError::from)?;
                    let suffixes: Vec<&str> = sibling_paths
                        .iter()
                        .map(|path| path.rsplit('-').next().unwrap_or_default())
                        .collect();
                    let branch_path =
                        format!("{}-{}", parent.branch_path, next_segment(suffixes));

                    let now = Utc::now().to_rfc3339();
                    let record = ProjectDB {
                        id: Uuid::new_v4().to_string(),
                        name: draft.name,
                        description: draft.description,
                        parent_id: Some(parent_id.clone()),
                        branch_path,
                        // A branch starts as an exact snapshot of its parent.
                        input_json: parent.input_json.clone(),
                        result_json: parent.result_json.clone(),
                        created_at: now.clone(),
                        updated_at: now,
                    };
                    diesel::insert_into(projects::table)
                        .values(&record)
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    Ok(Some(SavedProject::try_from(record)?))
                },
            )
            .await
    }

    async fn delete_cascade(&self, project_id: &str) -> Result<Vec<String>> {
        let project_id = project_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<String>> {
                let links: Vec<(String, Option<String>)> = projects::table
                    .select((projects::id, projects::parent_id))
                    .load::<(String, Option<String>)>(conn)
                    .map_err(StorageError::from)?;

                let deleted = collect_subtree(&project_id, &links);
                if deleted.is_empty() {
                    return Ok(deleted);
                }

                diesel::delete(projects::table.filter(projects::id.eq_any(&deleted)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
