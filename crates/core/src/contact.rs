//! Contact-form submission logic.
//!
//! A submission arrives either as a JSON document or as form-encoded pairs.
//! Both shapes are normalized into one [`ContactFields`] value before any
//! validation happens, so validation never branches on the payload shape.

use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;

/// Violation message for a missing email address.
pub const EMAIL_REQUIRED: &str = "Email is required.";

/// Violation message for a missing message body.
pub const MESSAGE_REQUIRED: &str = "Message is required.";

/// Acknowledgement shown after a submission is stored.
pub const RECEIVED_ACK: &str = "Thanks — your message was received!";

/// Generic message shown when a submission could not be stored.
pub const SAVE_FAILED: &str = "Server error saving message.";

/// Fields checked by [`ContactFields::check`], in the order their
/// violations are reported.
const VALIDATED_FIELDS: [&str; 2] = ["email", "message"];

/// The five canonical contact-form fields.
///
/// Every value is trimmed; a missing field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ContactFields {
    pub first: String,
    pub last: String,
    // Literals must match `EMAIL_REQUIRED` and `MESSAGE_REQUIRED`.
    #[validate(length(min = 1, message = "Email is required."))]
    pub email: String,
    pub phone: String,
    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

impl ContactFields {
    /// Build the canonical fields from a lookup function.
    ///
    /// `get` returns the raw value for a field name, or `None` when absent.
    pub fn from_lookup<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |name: &str| {
            get(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            first: field("first"),
            last: field("last"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        }
    }

    /// Normalize a JSON payload.
    ///
    /// Strings are taken as-is, `null` counts as missing, and other scalars
    /// use their JSON text. A payload that is not an object has no fields.
    pub fn from_json(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::default();
        };

        Self::from_lookup(|name| match object.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        })
    }

    /// Normalize form-encoded pairs. The first occurrence of a key wins.
    pub fn from_form<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_lookup(|name| {
            pairs
                .iter()
                .find(|(k, _)| k.as_ref() == name)
                .map(|(_, v)| v.as_ref().to_string())
        })
    }

    /// Check the presence rules.
    ///
    /// Every rule is evaluated; the error carries one message per violated
    /// rule, email first.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|errors| {
            let field_errors = errors.field_errors();
            let messages = VALIDATED_FIELDS
                .iter()
                .filter_map(|field| field_errors.get(*field))
                .flat_map(|errs| errs.iter())
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid.", err.code),
                })
                .collect();
            CoreError::Validation(messages)
        })
    }

    /// `"{first} {last}"` with surrounding whitespace removed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last).trim().to_string()
    }

    /// Subject line of the administrator notification.
    pub fn notification_subject(&self) -> String {
        format!("New contact: {} {}", self.first, self.last)
            .trim()
            .to_string()
    }

    /// Plain-text body of the administrator notification.
    pub fn notification_body(&self) -> String {
        format!(
            "From: {} {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            self.first, self.last, self.email, self.phone, self.message
        )
    }
}
