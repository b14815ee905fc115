//! Repository for the `contact_messages` table.

use chrono::Utc;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first, last, email, phone, message, created_at";

/// Contact messages are append-only: they are created and read, never
/// updated or deleted.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a new contact message, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (first, last, email, phone, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.first)
            .bind(&input.last)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all contact messages, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }
}
