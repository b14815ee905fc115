//! Table definitions.
//!
//! `email` and `message` are nullable here: their presence is enforced by
//! the contact handler, not by the store.

use crate::DbPool;

const CREATE_TABLES: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS contact_messages (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        first      TEXT,
        last       TEXT,
        email      TEXT,
        phone      TEXT,
        message    TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT,
        category    TEXT,
        description TEXT,
        tags        TEXT,
        img         TEXT,
        created_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS testimonials (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        author     TEXT,
        role       TEXT,
        text       TEXT,
        rating     INTEGER DEFAULT 5,
        created_at TEXT NOT NULL
    )",
];

/// Create every table that does not exist yet.
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
