//! Testimonial entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Rating given to a testimonial when none is supplied.
pub const DEFAULT_RATING: i32 = 5;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author: Option<String>,
    pub role: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone)]
pub struct CreateTestimonial {
    pub author: String,
    pub role: String,
    pub text: String,
    /// Defaults to [`DEFAULT_RATING`] if omitted.
    pub rating: Option<i32>,
}
