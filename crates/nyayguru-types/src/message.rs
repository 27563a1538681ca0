//! Chat message types for the NyayGuru transcript.
//!
//! Messages carry a tagged [`MessageKind`] instead of the loose
//! `isLoading`/`isInfo`/`isError` flags of earlier iterations, so the
//! transcript can tell placeholders, advisories, and real exchanges apart
//! without string sniffing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// What role a message plays in the transcript.
///
/// Only `Normal` messages are part of the conversation proper; the other
/// variants are client-side bookkeeping and are excluded from the message
/// history sent to the answering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// A real user question or bot answer.
    Normal,
    /// The seeded greeting at the top of a fresh transcript.
    Welcome,
    /// Transient "generating response..." placeholder. Removed and replaced
    /// by the real answer or an error message.
    Loading,
    /// System advisory (category/language change, login hints).
    Info,
    /// User-facing failure text from a classified API error.
    Error,
}

/// A source citation attached to a bot answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: String,
    pub url: String,
}

/// A single message in a chat transcript.
///
/// Immutable once appended, except that a `Loading` placeholder is removed
/// and substituted by the real response or an error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub kind: MessageKind,
    pub timestamp: DateTime<Utc>,
    /// Citations backing a bot answer (empty for everything else).
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    /// Follow-up questions suggested by the answering service.
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

impl ChatMessage {
    fn new(text: String, sender: Sender, kind: MessageKind) -> Self {
        Self {
            id: Uuid::now_v7(),
            text,
            sender,
            kind,
            timestamp: Utc::now(),
            sources: Vec::new(),
            suggested_questions: Vec::new(),
        }
    }

    /// A question typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User, MessageKind::Normal)
    }

    /// A real answer from the answering service.
    pub fn bot(
        text: impl Into<String>,
        sources: Vec<SourceCitation>,
        suggested_questions: Vec<String>,
    ) -> Self {
        let mut msg = Self::new(text.into(), Sender::Bot, MessageKind::Normal);
        msg.sources = sources;
        msg.suggested_questions = suggested_questions;
        msg
    }

    /// The transient placeholder shown while a request is in flight.
    pub fn loading() -> Self {
        Self::new(
            "Generating response...".to_string(),
            Sender::Bot,
            MessageKind::Loading,
        )
    }

    /// The greeting seeded at the top of a transcript.
    ///
    /// References the active category when one is selected.
    pub fn welcome(category: Option<&str>) -> Self {
        let text = match category {
            Some(category) => {
                format!("Welcome to the {category} chat. How can I assist you today?")
            }
            None => "Hello! I'm NyayGuru, your legal assistant. Select a legal category \
                     and ask me a question."
                .to_string(),
        };
        Self::new(text, Sender::Bot, MessageKind::Welcome)
    }

    /// A system advisory (category/language switch and similar).
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot, MessageKind::Info)
    }

    /// A user-facing failure message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot, MessageKind::Error)
    }

    /// Whether this message belongs in the history sent to the service.
    pub fn is_history(&self) -> bool {
        self.kind == MessageKind::Normal
    }
}

/// A prior-exchange entry in the wire-format message history.
///
/// The answering service expects OpenAI-style `{role, content}` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub role: HistoryRole,
    pub content: String,
}

/// Role label used in the wire-format history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Assistant,
}

impl From<Sender> for HistoryRole {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User => HistoryRole::User,
            Sender::Bot => HistoryRole::Assistant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Bot] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
    }

    #[test]
    fn test_user_message_is_history() {
        let msg = ChatMessage::user("What is bail?");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.kind, MessageKind::Normal);
        assert!(msg.is_history());
    }

    #[test]
    fn test_bookkeeping_messages_excluded_from_history() {
        assert!(!ChatMessage::welcome(None).is_history());
        assert!(!ChatMessage::loading().is_history());
        assert!(!ChatMessage::info("Language switched").is_history());
        assert!(!ChatMessage::error("boom").is_history());
    }

    #[test]
    fn test_welcome_references_category() {
        let msg = ChatMessage::welcome(Some("Criminal Law"));
        assert!(msg.text.contains("Criminal Law"));

        let generic = ChatMessage::welcome(None);
        assert!(generic.text.contains("NyayGuru"));
    }

    #[test]
    fn test_bot_message_carries_sources_and_suggestions() {
        let msg = ChatMessage::bot(
            "Bail is...",
            vec![SourceCitation {
                title: "CrPC Section 436".to_string(),
                url: "https://example.org/crpc-436".to_string(),
            }],
            vec!["What is anticipatory bail?".to_string()],
        );
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.suggested_questions.len(), 1);
        assert!(msg.is_history());
    }

    #[test]
    fn test_history_role_from_sender() {
        assert_eq!(HistoryRole::from(Sender::User), HistoryRole::User);
        assert_eq!(HistoryRole::from(Sender::Bot), HistoryRole::Assistant);
    }

    #[test]
    fn test_chat_message_serde_defaults() {
        // Older payloads without sources/suggested_questions still parse.
        let json = r#"{
            "id": "0191e4a0-0000-7000-8000-000000000000",
            "text": "hi",
            "sender": "user",
            "kind": "normal",
            "timestamp": "2025-01-01T00:00:00Z"
        }"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(msg.sources.is_empty());
        assert!(msg.suggested_questions.is_empty());
    }
}
