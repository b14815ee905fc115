//! Handlers for the `/api/testimonials` resource.

use axum::extract::State;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::testimonial::Testimonial;
use folio_db::repositories::TestimonialRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Public JSON shape of a testimonial.
#[derive(Debug, Serialize)]
pub struct TestimonialResponse {
    pub id: DbId,
    pub author: Option<String>,
    pub role: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            author: t.author,
            role: t.role,
            text: t.text,
            rating: t.rating,
        }
    }
}

/// GET /api/testimonials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TestimonialResponse>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}
