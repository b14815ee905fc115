//! Handlers for the `/api/projects` resource.

use axum::extract::State;
use axum::Json;
use folio_core::tags::split_tags;
use folio_core::types::DbId;
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Public JSON shape of a project. Tags are split into an array.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: DbId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub img: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            tags: split_tags(project.tags.as_deref()),
            id: project.id,
            title: project.title,
            category: project.category,
            description: project.description,
            img: project.img,
        }
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}
