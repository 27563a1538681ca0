//! Session, category, and chat exchange types.
//!
//! The session identifier is opaque to the client: the answering service
//! issues it once and the client passes it back on every chat request to
//! scope conversation context.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::message::{HistoryMessage, SourceCitation};

/// Server-issued opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        SessionId(s)
    }
}

/// Language the client falls back to when the fetched set is empty.
pub const DEFAULT_LANGUAGE: &str = "English";

/// One chat request to the answering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// Canonical category name (the URL path carries the slug form).
    pub category: String,
    pub language: String,
    pub session_id: SessionId,
    /// Prior exchanges, oldest first.
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
}

/// The answering service's reply to a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

/// Convert a canonical category name to its URL-safe slug.
///
/// "Criminal Law" -> "criminal-law". Matches how the service keys its
/// public chat endpoint.
pub fn category_slug(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
