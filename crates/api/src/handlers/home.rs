//! Handler for the server-rendered homepage.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use folio_db::repositories::{ProjectRepo, TestimonialRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::{flash, render};

/// Most projects and testimonials shown on the homepage.
pub const HOMEPAGE_LIMIT: i64 = 6;

/// GET /
///
/// Consumes any pending flash messages: they are rendered once and the
/// cookie is expired.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let projects = ProjectRepo::list_recent(&state.pool, HOMEPAGE_LIMIT).await?;
    let testimonials = TestimonialRepo::list_recent(&state.pool, HOMEPAGE_LIMIT).await?;
    let messages = flash::pending(&headers, &state.flash);

    let page = render::homepage(&projects, &testimonials, &messages);
    let mut response = Html(page).into_response();
    if flash::has_cookie(&headers) {
        flash::clear(&mut response);
    }
    Ok(response)
}
