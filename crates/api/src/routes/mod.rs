//! Route tree.
//!
//! The site routes (homepage, contact form) live at the root; the read-only
//! JSON listings are nested under `/api`.

pub mod health;
pub mod listing;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    listing::router()
}
