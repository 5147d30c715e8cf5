//! Project catalog route handlers

use crate::error::{ApiResult, AppError};
use crate::models::Project;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

/// List the full project catalog
pub async fn list_projects(State(state): State<SharedState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.storage.list_projects().await?;
    debug!("Listing {} projects", projects.len());
    Ok(Json(projects))
}

/// Fetch one project by its slug
pub async fn get_project(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Project>> {
    debug!("Fetching project: {}", slug);

    let project = state
        .storage
        .get_project_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(project))
}
