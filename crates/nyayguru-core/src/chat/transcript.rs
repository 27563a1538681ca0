//! Append-only chat transcript.
//!
//! Wraps the message list with the invariants the orchestrator relies on:
//! messages are never mutated after append, except that a loading
//! placeholder is removed and substituted by the real answer or an error
//! message. A fresh transcript always starts with one welcome message.

use uuid::Uuid;

use nyayguru_types::message::{ChatMessage, HistoryMessage, MessageKind};

/// Ordered, append-only sequence of chat messages.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create a transcript seeded with a welcome message.
    pub fn new(category: Option<&str>) -> Self {
        Self {
            messages: vec![ChatMessage::welcome(category)],
        }
    }

    /// All messages, in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message and return its id.
    pub fn push(&mut self, message: ChatMessage) -> Uuid {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Remove the placeholder with `loading_id` and append `replacement`.
    ///
    /// The replacement lands at the end of the transcript, which is where
    /// the placeholder sat; a missing placeholder (already replaced) still
    /// appends the replacement so no answer is ever dropped.
    pub fn replace_loading(&mut self, loading_id: Uuid, replacement: ChatMessage) {
        self.messages
            .retain(|msg| !(msg.id == loading_id && msg.kind == MessageKind::Loading));
        self.messages.push(replacement);
    }

    /// Whether any loading placeholder is currently pending.
    pub fn has_pending(&self) -> bool {
        self.messages
            .iter()
            .any(|msg| msg.kind == MessageKind::Loading)
    }

    /// Prior exchanges in wire format, oldest first.
    ///
    /// Welcome, loading, info, and error messages are client-side
    /// bookkeeping and are excluded.
    pub fn history(&self) -> Vec<HistoryMessage> {
        self.messages
            .iter()
            .filter(|msg| msg.is_history())
            .map(|msg| HistoryMessage {
                role: msg.sender.into(),
                content: msg.text.clone(),
            })
            .collect()
    }

    /// Reset to a single welcome message referencing `category`.
    pub fn clear(&mut self, category: Option<&str>) {
        self.messages = vec![ChatMessage::welcome(category)];
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayguru_types::message::{HistoryRole, Sender};

    #[test]
    fn test_new_transcript_has_single_welcome() {
        let transcript = Transcript::new(Some("Civil Law"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].kind, MessageKind::Welcome);
        assert!(transcript.messages()[0].text.contains("Civil Law"));
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new(None);
        transcript.push(ChatMessage::user("first"));
        transcript.push(ChatMessage::user("second"));
        assert_eq!(transcript.messages()[1].text, "first");
        assert_eq!(transcript.messages()[2].text, "second");
    }

    #[test]
    fn test_replace_loading_substitutes_placeholder() {
        let mut transcript = Transcript::new(None);
        transcript.push(ChatMessage::user("What is bail?"));
        let loading_id = transcript.push(ChatMessage::loading());
        assert!(transcript.has_pending());

        transcript.replace_loading(loading_id, ChatMessage::bot("Bail is...", vec![], vec![]));

        assert!(!transcript.has_pending());
        assert_eq!(transcript.len(), 3);
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.text, "Bail is...");
        assert_eq!(last.sender, Sender::Bot);
    }

    #[test]
    fn test_replace_loading_never_touches_real_messages() {
        let mut transcript = Transcript::new(None);
        let user_id = transcript.push(ChatMessage::user("hello"));

        // An id that points at a non-loading message must not remove it.
        transcript.replace_loading(user_id, ChatMessage::error("oops"));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.messages()[1].text, "hello");
    }

    #[test]
    fn test_history_excludes_bookkeeping() {
        let mut transcript = Transcript::new(None);
        transcript.push(ChatMessage::user("What is bail?"));
        transcript.push(ChatMessage::bot("Bail is...", vec![], vec![]));
        transcript.push(ChatMessage::info("Language switched to Hindi."));
        transcript.push(ChatMessage::error("server error"));
        transcript.push(ChatMessage::loading());

        let history = transcript.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, HistoryRole::User);
        assert_eq!(history[0].content, "What is bail?");
        assert_eq!(history[1].role, HistoryRole::Assistant);
    }

    #[test]
    fn test_clear_resets_to_welcome() {
        let mut transcript = Transcript::new(None);
        transcript.push(ChatMessage::user("hello"));
        transcript.push(ChatMessage::bot("hi", vec![], vec![]));

        transcript.clear(Some("Family Law"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].kind, MessageKind::Welcome);
        assert!(transcript.messages()[0].text.contains("Family Law"));
    }
}
