//! Route definitions for the read-only JSON listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{blog, project, testimonial};
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /projects       -> project::list
/// GET    /testimonials   -> testimonial::list
/// GET    /blogs          -> blog::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/testimonials", get(testimonial::list))
        .route("/blogs", get(blog::list))
}
