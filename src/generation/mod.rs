//! Flashcard generation pipeline
//!
//! This module provides:
//! - A content requester that resolves the API key, builds the prompt, and
//!   issues one external generation call
//! - A response normalizer that reshapes the raw reply into [`Flashcard`]
//!   records
//! - A deterministic localized fallback used whenever the external service
//!   is unavailable, errors, or returns unusable output
//!
//! The requester's contract is total: callers always receive a non-empty
//! card batch (generated or fallback). The only error it surfaces is an
//! out-of-range day number, which is a caller bug rather than a runtime
//! condition.

pub mod client;
pub mod credentials;
pub mod fallback;
pub mod generator;
pub mod models;
pub mod normalize;
pub mod prompt;

pub use client::GeminiClient;
pub use credentials::{CredentialSource, EnvCredentials, FixedCredentials};
pub use fallback::fallback_cards;
pub use generator::FlashcardGenerator;
pub use models::{BatchOrigin, CardBatch, CardRequest, FallbackReason, Flashcard};
pub use normalize::normalize;
pub use prompt::{build_prompt, CARDS_PER_REQUEST};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error {status}: {message}")]
    Service { status: u16, message: String },

    #[error("No content generated")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid day: {0} (expected 1..=30)")]
    InvalidDay(u8),
}

impl GenerationError {
    /// Classify a caught error for batch telemetry. `InvalidDay` never
    /// reaches this: the requester rejects it before the catch-all.
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            GenerationError::MissingCredential => FallbackReason::MissingCredential,
            GenerationError::Transport(_) => FallbackReason::Transport,
            GenerationError::Service { .. } => FallbackReason::Service,
            GenerationError::EmptyResponse => FallbackReason::EmptyResponse,
            GenerationError::Parse(_) | GenerationError::InvalidDay(_) => FallbackReason::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// The external text-generation call, abstracted so tests can swap the
/// HTTP client for a mock.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One round trip: prompt in, raw reply text out. The key is resolved
    /// by the caller at call time and travels with each request.
    async fn generate(&self, prompt: &str, api_key: &str) -> Result<String>;
}
