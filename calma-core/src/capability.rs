//! The two black-box model capabilities the dashboard depends on.
//!
//! Both are synchronous: a call blocks until the backend answers or fails.
//! Implementations are shared between sessions through `Arc`, hence the
//! `Send + Sync` bounds.

use thiserror::Error;

/// Failure of an external generation or classification call.
///
/// There is no retry and no fallback value anywhere in the crate: whoever
/// receives one of these decides what to show the user.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("could not reach the model backend: {0}")]
    Transport(String),

    #[error("model backend answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model backend returned an unexpected payload: {0}")]
    Malformed(String),

    #[error("model unavailable: {0}")]
    Unavailable(String),
}

/// Raw output of a sentiment model: its own label vocabulary plus a score.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSentiment {
    pub label: String,
    pub score: f32,
}

pub trait GenerationCapability: Send + Sync {
    /// Generates text for `prompt`, bounded to `max_length` tokens.
    /// `sample` enables non-deterministic sampling.
    fn generate(&self, prompt: &str, max_length: usize, sample: bool)
    -> Result<String, CapabilityError>;
}

pub trait ClassificationCapability: Send + Sync {
    fn classify(&self, text: &str) -> Result<RawSentiment, CapabilityError>;
}
