//! Flash cookie transport.
//!
//! The signing format lives in [`folio_core::flash`]; this module moves
//! signed values in and out of `Cookie` / `Set-Cookie` headers.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use folio_core::flash::{FlashMessage, FlashSigner, FLASH_COOKIE};

/// Messages pending in the request's flash cookie.
///
/// A missing, malformed or forged cookie yields no messages.
pub fn pending(headers: &HeaderMap, signer: &FlashSigner) -> Vec<FlashMessage> {
    cookie_value(headers, FLASH_COOKIE)
        .and_then(|value| signer.decode(value))
        .unwrap_or_default()
}

/// Whether the request carries a flash cookie at all.
pub fn has_cookie(headers: &HeaderMap) -> bool {
    cookie_value(headers, FLASH_COOKIE).is_some()
}

/// Append `message` to whatever is already pending and set the cookie on
/// `response`.
pub fn queue(
    response: &mut Response,
    headers: &HeaderMap,
    signer: &FlashSigner,
    message: FlashMessage,
) {
    let mut messages = pending(headers, signer);
    messages.push(message);

    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        signer.encode(&messages)
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "Flash cookie is not a valid header value"),
    }
}

/// Expire the flash cookie on `response`.
pub fn clear(response: &mut Response) {
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
    );
}

/// Find a cookie by name across every `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}
