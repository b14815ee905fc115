//! Route definitions for the server-rendered site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, home};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /          -> home::index
/// POST   /contact   -> contact::submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/contact", post(contact::submit))
}
