//! Abstract text-generation collaborator.
//!
//! The core treats the language-model service as a black box that takes a
//! prompt and returns text or an error. Concrete backends live outside the
//! core (see `prep-interaction`).

use crate::error::Result;
use async_trait::async_trait;

/// A single prompt sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Optional system instruction framing the request.
    pub system: Option<String>,
    /// The user-content part of the prompt.
    pub prompt: String,
    /// Completion-token cap for this request; backends fall back to their
    /// configured default when absent.
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a request with the given user prompt and no system framing.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    /// Sets the system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the completion-token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// An abstract text generator backed by an external language-model service.
///
/// Implementations should bound each call with a timeout and surface
/// failures as `PrepError::ExternalService`; callers treat an empty or
/// whitespace-only result as a failure too.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the given request.
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}
