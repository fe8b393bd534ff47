//! Retry policy applied by the HTTP transport

use std::time::Duration;

/// Retry policy for a single API call
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts including the first one
    pub max_attempts: u32,
    pub base_sleep: Duration,
    pub max_sleep: Duration,
    /// HTTP statuses worth another attempt
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_sleep: Duration::from_secs(1),
            max_sleep: Duration::from_secs(30),
            retryable_statuses: vec![409, 429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// A policy that makes exactly one attempt
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_sleep(mut self, sleep: Duration) -> Self {
        self.base_sleep = sleep;
        self
    }

    pub fn max_sleep(mut self, sleep: Duration) -> Self {
        self.max_sleep = sleep;
        self
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Sleep before the given retry (1-based): base * 2^(attempt-1), capped.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_sleep
            .checked_mul(factor)
            .unwrap_or(self.max_sleep)
            .min(self.max_sleep)
    }
}

/// Fresh idempotency token for `opc-retry-token`
pub fn generate_retry_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Caller's token if given, otherwise a freshly generated one.
///
/// Pure with respect to the caller's options: the token is returned, never
/// written back.
pub fn effective_retry_token(requested: Option<&str>) -> String {
    match requested {
        Some(token) if !token.trim().is_empty() => token.to_string(),
        _ => generate_retry_token(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig::default().max_sleep(Duration::from_secs(5));
        assert_eq!(config.backoff(1), Duration::from_secs(1));
        assert_eq!(config.backoff(2), Duration::from_secs(2));
        assert_eq!(config.backoff(3), Duration::from_secs(4));
        assert_eq!(config.backoff(4), Duration::from_secs(5));
        assert_eq!(config.backoff(40), Duration::from_secs(5));
    }

    #[test]
    fn test_none_makes_one_attempt() {
        assert_eq!(RetryConfig::none().max_attempts, 1);
        assert_eq!(RetryConfig::default().max_attempts(0).max_attempts, 1);
    }

    #[test]
    fn test_retry_token_prefers_caller_value() {
        assert_eq!(effective_retry_token(Some("abc")), "abc");
        let generated = effective_retry_token(Some("  "));
        assert_eq!(generated.len(), 32);
        assert_ne!(effective_retry_token(None), generated);
    }
}
