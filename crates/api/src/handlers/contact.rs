//! Handler for contact-form submissions.
//!
//! Accepts JSON, urlencoded or multipart form payloads and answers in one of two shapes:
//! programmatic clients get a JSON body with an `ok` flag, interactive
//! clients get a redirect back to the contact section with a flash message.
//!
//! Once the message row is stored the request has succeeded; the admin
//! notification that follows can never change the response.

use std::convert::Infallible;

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use folio_core::contact::{ContactFields, RECEIVED_ACK, SAVE_FAILED};
use folio_core::flash::FlashMessage;
use folio_db::models::contact_message::{ContactMessage, CreateContactMessage};
use folio_db::repositories::ContactMessageRepo;
use folio_events::Notification;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::flash;
use crate::state::AppState;

/// Where interactive clients are sent after submitting.
pub const CONTACT_ANCHOR: &str = "/#contact";

/// Header value browsers' async requests carry in `X-Requested-With`.
const XHR_MARKER: &str = "XMLHttpRequest";

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// A contact submission normalized from either payload encoding.
#[derive(Debug)]
pub struct ContactPayload {
    /// The body was sent as JSON.
    pub is_json: bool,
    pub fields: ContactFields,
}

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Never rejects: an unreadable body normalizes to empty fields, which
    /// then fail validation like any other incomplete submission.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json_content_type(req.headers()) {
            let fields = match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => ContactFields::from_json(&value),
                Err(rejection) => {
                    tracing::debug!(%rejection, "Unreadable JSON contact payload");
                    ContactFields::default()
                }
            };
            return Ok(Self {
                is_json: true,
                fields,
            });
        }

        let fields = if is_multipart_content_type(req.headers()) {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => match text_parts(multipart).await {
                    Ok(pairs) => ContactFields::from_form(&pairs),
                    Err(err) => {
                        tracing::debug!(error = %err, "Unreadable multipart contact payload");
                        ContactFields::default()
                    }
                },
                Err(rejection) => {
                    tracing::debug!(%rejection, "Unreadable multipart contact payload");
                    ContactFields::default()
                }
            }
        } else {
            match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => ContactFields::from_form(&pairs),
                Err(rejection) => {
                    tracing::debug!(%rejection, "Unreadable form contact payload");
                    ContactFields::default()
                }
            }
        };
        Ok(Self {
            is_json: false,
            fields,
        })
    }
}

/// Collect the named text parts of a multipart body in order. File uploads
/// are skipped.
async fn text_parts(mut multipart: Multipart) -> Result<Vec<(String, String)>, MultipartError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        pairs.push((name, field.text().await?));
    }
    Ok(pairs)
}

/// Lowercased media type of the request without parameters.
fn media_type(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    Some(
        content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase(),
    )
}

/// `application/json` or any `application/*+json` media type.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(essence) = media_type(headers) else {
        return false;
    };
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// `multipart/form-data`, as sent by `fetch` with a `FormData` body.
pub fn is_multipart_content_type(headers: &HeaderMap) -> bool {
    media_type(headers).is_some_and(|essence| essence == "multipart/form-data")
}

// ---------------------------------------------------------------------------
// Client kind
// ---------------------------------------------------------------------------

/// How the caller expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// Browser form post: redirect plus flash message.
    Interactive,
    /// Script or fetch-based UI: JSON body with an `ok` flag.
    Programmatic,
}

impl ClientKind {
    /// Programmatic if the request is an async browser request or the
    /// payload is JSON; interactive otherwise.
    pub fn detect(headers: &HeaderMap, is_json: bool) -> Self {
        let is_xhr = headers
            .get("x-requested-with")
            .is_some_and(|v| v.as_bytes() == XHR_MARKER.as_bytes());

        if is_xhr || is_json {
            ClientKind::Programmatic
        } else {
            ClientKind::Interactive
        }
    }

    fn success(self, state: &AppState, headers: &HeaderMap) -> Response {
        match self {
            ClientKind::Programmatic => {
                Json(json!({ "ok": true, "message": RECEIVED_ACK })).into_response()
            }
            ClientKind::Interactive => {
                redirect_with_flash(state, headers, FlashMessage::success(RECEIVED_ACK))
            }
        }
    }

    fn failure(self, state: &AppState, headers: &HeaderMap, err: AppError) -> Response {
        let messages: Vec<String> = match &err {
            AppError::Core(core) => {
                tracing::debug!(errors = ?core.messages(), "Contact submission rejected");
                core.messages().to_vec()
            }
            AppError::Database(db_err) => {
                tracing::error!(error = %db_err, "DB save failed");
                vec![SAVE_FAILED.to_string()]
            }
        };

        match self {
            ClientKind::Programmatic => (
                err.status(),
                Json(json!({ "ok": false, "errors": messages })),
            )
                .into_response(),
            ClientKind::Interactive => {
                redirect_with_flash(state, headers, FlashMessage::error(messages.join(" ")))
            }
        }
    }
}

fn redirect_with_flash(state: &AppState, headers: &HeaderMap, message: FlashMessage) -> Response {
    let mut response = Redirect::to(CONTACT_ANCHOR).into_response();
    flash::queue(&mut response, headers, &state.flash, message);
    response
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /contact
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: ContactPayload,
) -> Response {
    let client = ClientKind::detect(&headers, payload.is_json);
    let fields = payload.fields;

    match save(&state, &fields).await {
        Ok(stored) => {
            tracing::info!(id = stored.id, "Contact message stored");
            notify_admin(&state, &fields).await;
            client.success(&state, &headers)
        }
        Err(err) => client.failure(&state, &headers, err),
    }
}

/// Validate, then store. Nothing is written when validation fails.
async fn save(state: &AppState, fields: &ContactFields) -> AppResult<ContactMessage> {
    fields.check()?;
    let stored = ContactMessageRepo::create(&state.pool, &CreateContactMessage::from(fields)).await?;
    Ok(stored)
}

/// Send the admin notification. The outcome is logged and otherwise
/// ignored.
async fn notify_admin(state: &AppState, fields: &ContactFields) {
    let Some(recipient) = state.config.admin_email.clone() else {
        tracing::debug!("No admin address configured; skipping notification");
        return;
    };

    let notification = Notification {
        subject: fields.notification_subject(),
        body: fields.notification_body(),
        recipient,
    };
    let outcome = state.notifier.notify(&notification).await;
    tracing::debug!(?outcome, from = %fields.display_name(), "Contact notification attempted");
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn plain_form_post_is_interactive() {
        let h = headers(&[("content-type", "application/x-www-form-urlencoded")]);
        assert_eq!(ClientKind::detect(&h, false), ClientKind::Interactive);
    }

    #[test]
    fn xhr_header_is_programmatic() {
        let h = headers(&[("x-requested-with", "XMLHttpRequest")]);
        assert_eq!(ClientKind::detect(&h, false), ClientKind::Programmatic);
    }

    #[test]
    fn json_body_is_programmatic() {
        assert_eq!(
            ClientKind::detect(&HeaderMap::new(), true),
            ClientKind::Programmatic
        );
    }

    #[test]
    fn other_requested_with_values_are_interactive() {
        let h = headers(&[("x-requested-with", "fetch")]);
        assert_eq!(ClientKind::detect(&h, false), ClientKind::Interactive);
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type(&headers(&[("content-type", "application/json")])));
        assert!(is_json_content_type(&headers(&[(
            "content-type",
            "application/json; charset=utf-8"
        )])));
        assert!(is_json_content_type(&headers(&[(
            "content-type",
            "application/vnd.api+json"
        )])));
        assert!(!is_json_content_type(&headers(&[(
            "content-type",
            "application/x-www-form-urlencoded"
        )])));
        assert!(!is_json_content_type(&headers(&[("content-type", "text/plain")])));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn multipart_content_type() {
        assert!(is_multipart_content_type(&headers(&[(
            "content-type",
            "multipart/form-data; boundary=XBOUNDARY"
        )])));
        assert!(!is_multipart_content_type(&headers(&[(
            "content-type",
            "application/x-www-form-urlencoded"
        )])));
        assert!(!is_multipart_content_type(&HeaderMap::new()));
    }
}
