use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use fba_core::projects::{BranchDraft, ProjectDraft, ProjectNode, SavedProject};

async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ProjectNode>>> {
    let tree = state.project_service.list_tree()?;
    Ok(Json(tree))
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<Json<SavedProject>> {
    let project = state.project_service.create_project(draft).await?;
    Ok(Json(project))
}

async fn get_project(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SavedProject>> {
    let project = state
        .project_service
        .get_project(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(project))
}

async fn update_project(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<Json<SavedProject>> {
    let project = state
        .project_service
        .update_project(&id, draft)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(project))
}

async fn delete_project(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<String>>> {
    let deleted = state.project_service.delete_project(&id).await?;
    if deleted.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(deleted))
}

async fn create_branch(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BranchDraft>,
) -> ApiResult<Json<SavedProject>> {
    let branch = state
        .project_service
        .create_branch(&id, draft)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(branch))
}

#[derive(serde::Deserialize)]
struct ExportQuery {
    format: Option<String>,
}

/// Export a saved project, either as the full JSON snapshot (default) or as
/// the flattened CSV summary.
async fn export_project(
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    if query.format.as_deref() == Some("csv") {
        let csv = state
            .project_service
            .export_csv(&id)?
            .ok_or(ApiError::NotFound)?;
        return Ok(([(header::CONTENT_TYPE, "text/csv")], csv).into_response());
    }

    let project = state
        .project_service
        .get_project(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(project).into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project)
                .put(update_project)
                .delete(delete_project),
        )
        .route("/projects/{id}/branch", post(create_branch))
        .route("/projects/{id}/export", get(export_project))
}
