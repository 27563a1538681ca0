//! Bounded retry loop with an injected linear backoff policy.
//!
//! Replaces the retry-via-recursion that used to live inside the send
//! path. The loop is explicit, the delays come from the policy, and the
//! sleeps go through `tokio::time` so tests can run on a paused clock.

use std::time::Duration;

use nyayguru_types::config::RetrySettings;
use nyayguru_types::error::ApiError;

/// Linear backoff policy: attempt N waits `base * N` before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Base delay; attempt 1 retries after `base`, attempt 2 after `2 * base`.
    pub base: Duration,
}

impl BackoffPolicy {
    /// Delay before the retry that follows failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base * attempt
    }

    /// Whether another attempt is allowed after failed attempt `attempt`.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base: Duration::from_secs(2),
        }
    }
}

impl From<&RetrySettings> for BackoffPolicy {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            base: Duration::from_millis(settings.backoff_base_ms),
        }
    }
}

/// Run `operation` under the policy, retrying retryable failures.
///
/// Only errors for which [`ApiError::is_retryable`] holds trigger another
/// attempt; everything else is returned immediately. The final error is
/// returned once attempts are exhausted.
pub async fn retry_request<T, F, Fut>(
    policy: BackoffPolicy,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && policy.should_retry(attempt) => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Request failed, retrying after backoff"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
