//! Contact message entity model and DTOs.

use folio_core::contact::ContactFields;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub first: Option<String>,
    pub last: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for storing a new contact message.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&ContactFields> for CreateContactMessage {
    fn from(fields: &ContactFields) -> Self {
        Self {
            first: fields.first.clone(),
            last: fields.last.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            message: fields.message.clone(),
        }
    }
}
