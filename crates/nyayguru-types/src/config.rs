//! Client configuration types.
//!
//! `ClientConfig` represents the top-level `config.toml` controlling the
//! API endpoint, timeouts, and retry behavior. All fields have sensible
//! defaults so a missing file means a working local setup.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the NyayGuru client.
///
/// Loaded from `~/.nyayguru/config.toml`; `NYAYGURU_API_URL` and
/// `NYAYGURU_GOOGLE_CLIENT_ID` env vars override the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the answering service API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// OAuth client identifier for Google login, if configured.
    #[serde(default)]
    pub google_client_id: Option<String>,

    /// Timeout for session/category/auth calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Timeout for chat sends, in seconds. Generation can be slow.
    #[serde(default = "default_chat_timeout_secs")]
    pub chat_timeout_secs: u64,

    /// Timeout for document upload and analysis, in seconds.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,

    /// Retry behavior for chat sends.
    #[serde(default)]
    pub retry: RetrySettings,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_chat_timeout_secs() -> u64 {
    60
}

fn default_upload_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            google_client_id: None,
            request_timeout_secs: default_request_timeout_secs(),
            chat_timeout_secs: default_chat_timeout_secs(),
            upload_timeout_secs: default_upload_timeout_secs(),
            retry: RetrySettings::default(),
        }
    }
}

/// Bounded-retry settings for chat sends.
///
/// Delays are linear: `backoff_base_ms * attempt` (2s, then 4s with the
/// defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Total attempts, including the first (3 = up to 2 retries).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds.
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    2000
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}
