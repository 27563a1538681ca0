//! Wire-format DTOs for the answering service.
//!
//! Field names follow the service's response models; domain types in
//! `nyayguru-types` already match the chat request/response shapes, so
//! only the envelope types live here.

use serde::Deserialize;
use serde_json::Value;

use std::collections::BTreeMap;

/// `POST /chat/session` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    pub session_id: String,
}

/// `GET /categories/` response.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// `GET /categories/languages` response.
///
/// The mapping values (language codes) are unused client-side; a BTreeMap
/// keeps the extracted name list deterministic.
#[derive(Debug, Deserialize)]
pub(crate) struct LanguagesResponse {
    #[serde(default)]
    pub languages: BTreeMap<String, Value>,
}

/// `POST /auth/google-login` request body.
#[derive(Debug, serde::Serialize)]
pub(crate) struct GoogleLoginRequest<'a> {
    pub token: &'a str,
}

/// Error envelope used by the service (`{"detail": ...}`).
///
/// `detail` is usually a string but validation errors carry structured
/// lists; anything non-string is rendered as JSON.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Extract the human-readable detail from an error response body.
///
/// Falls back to the raw body when it is not the expected envelope.
pub(crate) fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Value::String(s)),
        }) => s,
        Ok(ErrorBody {
            detail: Some(other),
        }) => other.to_string(),
        _ => body.trim().to_string(),
    }
}
