//! Repository for the `testimonials` table.

use chrono::Utc;

use crate::models::testimonial::{CreateTestimonial, Testimonial, DEFAULT_RATING};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author, role, text, rating, created_at";

/// Provides insert and read operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    ///
    /// If `rating` is `None` in the input, defaults to 5.
    pub async fn create(
        pool: &DbPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author, role, text, rating, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author)
            .bind(&input.role)
            .bind(&input.text)
            .bind(input.rating.unwrap_or(DEFAULT_RATING))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all testimonials ordered by most recently created first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created testimonials, newest first.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of testimonials.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
