//! Bearer token holder shared by every clone of the API client.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use std::sync::{Arc, RwLock};

// JWT segments are base64url; accept them with or without trailing padding.
const TOKEN_SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(Some(token.into()));
        session
    }

    /// Replaces the current token. `None` (or an empty string) logs out.
    pub fn set_token(&self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        if let Some(t) = &token {
            if decode_session_id(t).is_none() {
                log::error!("Could not decode session id from token");
            }
        }
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    pub fn clear(&self) {
        self.set_token(None);
    }

    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Session id claim embedded in the token payload, if it can be read.
    ///
    /// Called on every frame by the UI; decode failures are reported by `set_token`.
    pub fn session_id(&self) -> Option<i64> {
        decode_session_id(&self.token()?)
    }
}

/// Reads `session_id` out of the payload segment of a JWT-shaped token.
pub fn decode_session_id(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = TOKEN_SEGMENT.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;

    match claims.get("session_id")? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
