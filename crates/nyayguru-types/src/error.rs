//! Structured error taxonomy for remote-service calls.
//!
//! Errors are classified once, at the HTTP boundary, from the status code
//! and transport outcome. Everything downstream (the orchestrator, the
//! CLI) works with variants, not substrings. The one substring check that
//! survives is the 400 "Invalid category" case: the service reports both
//! malformed requests and unknown categories as 400 with free-text detail,
//! and its wording is not a formal contract.

use thiserror::Error;

/// Errors from calls to the remote answering service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 whose detail names an unknown category.
    #[error("invalid category: {detail}")]
    InvalidCategory { detail: String },

    /// Any other 400.
    #[error("invalid request: {detail}")]
    InvalidRequest { detail: String },

    /// 401.
    #[error("authentication required")]
    Unauthorized,

    /// 403.
    #[error("access denied")]
    Forbidden,

    /// 429.
    #[error("rate limited")]
    RateLimited,

    /// 5xx. Retryable.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// Client-side timeout; the pending request was abandoned.
    #[error("request timed out")]
    Timeout,

    /// Could not reach the server at all. Retryable.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// A required step of session initialization failed.
    #[error("initialization failed: {0}")]
    Init(String),
}

impl ApiError {
    /// Classify an HTTP error status plus the server's `detail` text.
    ///
    /// Statuses outside the taxonomy fall through to `InvalidRequest`
    /// (4xx) or `Server` (everything >= 500).
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            400 if detail.contains("Invalid category") => ApiError::InvalidCategory { detail },
            400 => ApiError::InvalidRequest { detail },
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            429 => ApiError::RateLimited,
            s if s >= 500 => ApiError::Server { status: s, detail },
            _ => ApiError::InvalidRequest { detail },
        }
    }

    /// Whether a retry can plausibly succeed.
    ///
    /// Only network-level failures and 5xx responses qualify; 4xx and
    /// client-side timeouts are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Server { .. })
    }

    /// Whether this failure should prompt the user to pick a different
    /// category.
    pub fn is_category_related(&self) -> bool {
        matches!(self, ApiError::InvalidCategory { .. })
    }

    /// Fixed user-facing text shown in the chat transcript.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidCategory { .. } => {
                "Category not found. Please select a valid category from the dropdown."
                    .to_string()
            }
            ApiError::InvalidRequest { detail } => detail.clone(),
            ApiError::Unauthorized => {
                "You need to be logged in to use this feature".to_string()
            }
            ApiError::Forbidden => {
                "Access denied. Please check your user type.".to_string()
            }
            ApiError::RateLimited => {
                "You've reached the rate limit. Please wait a moment before sending \
                 more messages"
                    .to_string()
            }
            ApiError::Server { .. } => {
                "The server encountered an error. Please try again later.".to_string()
            }
            ApiError::Timeout => {
                "Request timed out. The assistant might be taking too long to respond"
                    .to_string()
            }
            ApiError::Network(_) => {
                "Cannot connect to the server. Please check your internet connection"
                    .to_string()
            }
            ApiError::Deserialization(_) => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
            ApiError::Init(_) => {
                "Failed to initialize chat. Please try again.".to_string()
            }
        }
    }

    /// User-facing text for failures of the credential login flow.
    ///
    /// Same table as [`user_message`](Self::user_message) except that 401
    /// means bad credentials rather than a missing login.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Invalid email or password. Please try again.".to_string(),
            ApiError::RateLimited => {
                "Too many login attempts. Please try again later.".to_string()
            }
            other => other.user_message(),
        }
    }
}
