//! Chat session orchestrator.
//!
//! Owns session identity, category/language selection, the transcript,
//! and the message send/receive cycle. Generic over [`ChatApi`] so the
//! view layer can be driven against the HTTP client or a mock.
//!
//! Every remote failure is caught here and converted into a transcript
//! message; nothing propagates to the caller of `send_message`.

use tracing::{debug, info, warn};

use nyayguru_types::chat::{ChatRequest, ChatResponse, SessionId, DEFAULT_LANGUAGE};
use nyayguru_types::error::ApiError;
use nyayguru_types::message::ChatMessage;

use crate::chat::category::resolve_category;
use crate::chat::transcript::Transcript;
use crate::client::ChatApi;
use crate::retry::{retry_request, BackoffPolicy};

/// Mediates between the view layer and the remote answering service.
///
/// State is only ever mutated through `&mut self`, so a single owner
/// cannot interleave sends; concurrent callers holding separate
/// orchestrators get separate transcripts.
pub struct ChatOrchestrator<A: ChatApi> {
    api: A,
    backoff: BackoffPolicy,
    session_id: Option<SessionId>,
    categories: Vec<String>,
    languages: Vec<String>,
    active_category: Option<String>,
    active_language: String,
    transcript: Transcript,
}

impl<A: ChatApi> ChatOrchestrator<A> {
    /// Create an uninitialized orchestrator.
    ///
    /// The transcript starts with the generic welcome message;
    /// [`initialize`](Self::initialize) must run before messages can be
    /// sent.
    pub fn new(api: A, backoff: BackoffPolicy) -> Self {
        Self {
            api,
            backoff,
            session_id: None,
            categories: Vec::new(),
            languages: Vec::new(),
            active_category: None,
            active_language: DEFAULT_LANGUAGE.to_string(),
            transcript: Transcript::new(None),
        }
    }

    /// Bootstrap the session: session id, category set, language set.
    ///
    /// The three calls run in order; any failure surfaces as a single
    /// [`ApiError::Init`]. An optional slug hint (from a deep link) is
    /// resolved against the fetched categories, falling back to the first
    /// fetched category.
    pub async fn initialize(&mut self, category_hint: Option<&str>) -> Result<(), ApiError> {
        let session_id = self
            .api
            .create_session()
            .await
            .map_err(|e| ApiError::Init(format!("session creation failed: {e}")))?;

        let categories = self
            .api
            .fetch_categories()
            .await
            .map_err(|e| ApiError::Init(format!("category fetch failed: {e}")))?;

        let languages = self
            .api
            .fetch_languages()
            .await
            .map_err(|e| ApiError::Init(format!("language fetch failed: {e}")))?;

        self.active_category = resolve_category(category_hint, &categories);
        self.languages = if languages.is_empty() {
            vec![DEFAULT_LANGUAGE.to_string()]
        } else {
            languages
        };
        self.categories = categories;
        self.session_id = Some(session_id);

        info!(
            session_id = %self.session_id.as_ref().expect("just set"),
            category = ?self.active_category,
            categories = self.categories.len(),
            languages = self.languages.len(),
            "Chat session initialized"
        );
        Ok(())
    }

    /// Send one user message and record the outcome in the transcript.
    ///
    /// Silent no-op on empty/whitespace text or before initialization.
    /// Network-level failures and 5xx responses are retried with linear
    /// backoff (2 extra attempts by default); every other failure is
    /// final. All failures become transcript messages.
    pub async fn send_message(&mut self, text: &str) {
        let query = text.trim();
        if query.is_empty() {
            debug!("Ignoring empty message");
            return;
        }
        let (Some(session_id), Some(category)) = (&self.session_id, &self.active_category) else {
            debug!("Ignoring message before initialization");
            return;
        };

        let request = ChatRequest {
            query: query.to_string(),
            category: category.clone(),
            language: self.active_language.clone(),
            session_id: session_id.clone(),
            // History as of before this message; the new question travels
            // in `query`.
            messages: self.transcript.history(),
        };

        self.transcript.push(ChatMessage::user(query));
        let loading_id = self.transcript.push(ChatMessage::loading());

        let api = &self.api;
        let result = retry_request(self.backoff, |_| api.send_chat(&request)).await;

        match result {
            Ok(response) => self.record_answer(loading_id, response),
            Err(err) => self.record_failure(loading_id, err),
        }
    }

    fn record_answer(&mut self, loading_id: uuid::Uuid, response: ChatResponse) {
        debug!(
            sources = response.sources.len(),
            suggestions = response.suggested_questions.len(),
            "Answer received"
        );
        self.transcript.replace_loading(
            loading_id,
            ChatMessage::bot(
                response.answer,
                response.sources,
                response.suggested_questions,
            ),
        );
    }

    fn record_failure(&mut self, loading_id: uuid::Uuid, err: ApiError) {
        warn!(error = %err, "Chat send failed");
        let category_related = err.is_category_related();
        self.transcript
            .replace_loading(loading_id, ChatMessage::error(err.user_message()));
        if category_related {
            self.transcript.push(ChatMessage::info(
                "Try selecting a different category from the sidebar and ask again.",
            ));
        }
    }

    /// Switch the active category and announce the change.
    ///
    /// Prior messages are not resent. A category outside the fetched set
    /// is rejected, preserving the invariant that the active category is
    /// always a member of the last-fetched set.
    pub fn change_category(&mut self, category: &str) -> Result<(), ApiError> {
        let Some(canonical) = self
            .categories
            .iter()
            .find(|cat| cat.eq_ignore_ascii_case(category))
            .cloned()
        else {
            return Err(ApiError::InvalidCategory {
                detail: format!("unknown category: {category}"),
            });
        };

        self.transcript.push(ChatMessage::info(format!(
            "You are now in the \"{canonical}\" category. Please ask a relevant question."
        )));
        self.active_category = Some(canonical);
        Ok(())
    }

    /// Switch the response language and announce the change.
    pub fn change_language(&mut self, language: &str) {
        self.transcript.push(ChatMessage::info(format!(
            "Language switched to {language}. All responses will now be in {language}."
        )));
        self.active_language = language.to_string();
    }

    /// Reset the transcript to a single welcome message referencing the
    /// active category.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear(self.active_category.as_deref());
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.session_id.is_some()
    }
}
