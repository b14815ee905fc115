//! Signed flash messages.
//!
//! Interactive clients get status text on the page they are redirected to.
//! Pending messages travel in a cookie whose value is the hex-encoded JSON
//! list followed by a hex HMAC-SHA256 signature:
//!
//! ```text
//! <hex(json)>.<hex(hmac_sha256(secret, json))>
//! ```
//!
//! A value that fails signature verification decodes to nothing.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// Name of the cookie carrying pending flash messages.
pub const FLASH_COOKIE: &str = "flash";

type HmacSha256 = Hmac<Sha256>;

/// Display category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A status message queued for display on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Encodes and verifies flash cookie values with a server secret.
#[derive(Clone)]
pub struct FlashSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for FlashSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashSigner").finish_non_exhaustive()
    }
}

impl FlashSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length")
    }

    /// Produce a signed cookie value for `messages`.
    pub fn encode(&self, messages: &[FlashMessage]) -> String {
        let payload = serde_json::to_vec(messages).unwrap_or_default();
        let mut mac = self.mac();
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();
        format!("{}.{}", hex::encode(&payload), hex::encode(signature))
    }

    /// Verify and decode a cookie value. Returns `None` for anything that is
    /// malformed or carries a bad signature.
    pub fn decode(&self, value: &str) -> Option<Vec<FlashMessage>> {
        let (payload_hex, signature_hex) = value.split_once('.')?;
        let payload = hex::decode(payload_hex).ok()?;
        let signature = hex::decode(signature_hex).ok()?;

        let mut mac = self.mac();
        mac.update(&payload);
        mac.verify_slice(&signature).ok()?;

        serde_json::from_slice(&payload).ok()
    }
}
