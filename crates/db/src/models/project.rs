//! Portfolio project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Comma-delimited tag list.
    pub tags: Option<String>,
    pub img: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: String,
    pub img: String,
}
