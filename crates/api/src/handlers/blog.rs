//! Handlers for the `/api/blogs` resource.
//!
//! There is no blog entity; the listing is always empty.

use axum::Json;
use serde_json::Value;

/// GET /api/blogs
pub async fn list() -> Json<Vec<Value>> {
    Json(Vec::new())
}
