//! Text generation behind an explicit success/failure boundary.
//!
//! The external service is untrusted: it may be slow, rate limited, or
//! return garbage. [`generate`] bounds the call with a timeout and turns
//! every outcome into a [`GenerationOutcome`] for the synthesizer to
//! consume.

pub mod huggingface;
pub mod resilience;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use huggingface::HuggingFaceClient;
pub use resilience::RetryPolicy;

/// A prompt plus generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub temperature: f64,
}

/// Why the generation service did not produce a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("generation timed out")]
    Timeout,

    #[error("rate limited by generation service")]
    RateLimited,

    #[error("generation service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed generation response: {0}")]
    Malformed(String),

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("no API token configured")]
    Unconfigured,
}

impl GenerationFailure {
    /// Returns `true` when retrying the request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Timeout | Self::Malformed(_) | Self::EmptyResponse | Self::Unconfigured => false,
        }
    }
}

/// Result of one generation attempt, as seen by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(String),
    Failed(GenerationFailure),
}

impl GenerationOutcome {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Failed(_) => None,
        }
    }
}

/// A backend capable of producing text from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync + fmt::Debug {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure>;
}

/// Generator used when no API token is configured: always fails fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationFailure> {
        Err(GenerationFailure::Unconfigured)
    }
}

/// Run a generator under a time bound.
///
/// Blank output counts as a failure so callers never show an empty plan.
pub async fn generate(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    timeout: Duration,
) -> GenerationOutcome {
    match tokio::time::timeout(timeout, generator.generate(request)).await {
        Ok(Ok(text)) if !text.trim().is_empty() => GenerationOutcome::Generated(text),
        Ok(Ok(_)) => GenerationOutcome::Failed(GenerationFailure::EmptyResponse),
        Ok(Err(failure)) => GenerationOutcome::Failed(failure),
        Err(_) => GenerationOutcome::Failed(GenerationFailure::Timeout),
    }
}
