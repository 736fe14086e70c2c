use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::FolioError;
use folio_core::ordering::order_projects;
use folio_core::project::{validate_slug, Project, ProjectSummary};

use super::blocking;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/projects: project summaries in display order.
pub async fn list_projects(
    State(app): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>, AppError> {
    let content = app.content.clone();
    let order = app.config.work.display_order.clone();
    let projects = blocking(move || {
        let projects = content.list_projects()?;
        Ok(order_projects(projects, &order))
    })
    .await?;

    Ok(Json(projects.iter().map(Project::summary).collect()))
}

/// GET /api/projects/{slug}: full project record.
pub async fn get_project(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, AppError> {
    validate_slug(&slug)?;
    let content = app.content.clone();
    let project = blocking(move || {
        content
            .project_by_slug(&slug)?
            .ok_or(FolioError::ProjectNotFound(slug))
    })
    .await?;

    Ok(Json(project))
}
