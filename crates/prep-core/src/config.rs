//! Runtime configuration for the PREP core.
//!
//! All collaborator credentials and tuning knobs live in an explicit
//! configuration object owned by the entry point and passed down at
//! construction time. The core never reads environment variables or
//! global state itself.

use std::time::Duration;

/// Default chat model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default upper bound for a single generator request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default completion-token cap applied when a request does not set its own.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 500;

/// Configuration for the tutor and its generator collaborator.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// API key for the text-generation service.
    pub api_key: String,
    /// Model identifier passed to the text-generation service.
    pub model: String,
    /// Hard timeout for one generator call. On expiry the call fails as
    /// an external-service error and the session stage is left unchanged.
    pub request_timeout: Duration,
    /// Fallback completion-token limit for requests without their own.
    pub max_completion_tokens: u32,
}

impl PrepConfig {
    /// Creates a configuration with the given API key and default tuning.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the request timeout after construction.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Overrides the fallback completion-token limit after construction.
    pub fn with_max_completion_tokens(mut self, max_tokens: u32) -> Self {
        self.max_completion_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrepConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.max_completion_tokens, DEFAULT_MAX_COMPLETION_TOKENS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = PrepConfig::new("key")
            .with_model("gpt-4o-mini")
            .with_request_timeout(Duration::from_secs(5))
            .with_max_completion_tokens(128);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_completion_tokens, 128);
    }
}
