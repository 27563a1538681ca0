//! Remote answering service trait definitions.
//!
//! One trait per concern; the HTTP implementation in `nyayguru-infra`
//! implements all of them. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use std::path::Path;

use nyayguru_types::auth::{AuthResponse, ProfileUpdate, RegisterRequest, UserProfile};
use nyayguru_types::chat::{ChatRequest, ChatResponse, SessionId};
use nyayguru_types::document::DocumentAnalysis;
use nyayguru_types::error::ApiError;

/// Chat-facing operations of the answering service.
///
/// Implementations live in nyayguru-infra (`HttpApiClient`).
pub trait ChatApi: Send + Sync {
    /// Request a fresh session identifier.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<SessionId, ApiError>> + Send;

    /// Fetch the canonical legal category set.
    fn fetch_categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// Fetch the supported response languages (names only).
    fn fetch_languages(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// Send one chat request and await the answer.
    fn send_chat(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse, ApiError>> + Send;
}

/// Authentication operations of the answering service.
pub trait AuthApi: Send + Sync {
    /// Register a new account. Returns a token plus the created profile.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>> + Send;

    /// Exchange email + password for a bearer token (form-encoded flow).
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>> + Send;

    /// Exchange a Google ID token for a bearer token.
    fn google_login(
        &self,
        id_token: &str,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>> + Send;

    /// Fetch the profile of the authenticated user.
    fn me(&self) -> impl std::future::Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Update the authenticated user's profile.
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl std::future::Future<Output = Result<UserProfile, ApiError>> + Send;
}

/// Document analysis operations of the answering service.
pub trait DocumentApi: Send + Sync {
    /// Upload a document for analysis (multipart).
    fn upload_document(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<DocumentAnalysis, ApiError>> + Send;
}
