//! Answer-generation contract and the structured result of composing.
//!
//! Backends implement [`Generator`] and may fail freely; the composer in
//! the app crate converts failures into inline error text, so callers of
//! the pipeline never see a generation error.

use anyhow::Result;
use async_trait::async_trait;

/// Text-generation backend (an LLM behind some API).
#[async_trait]
pub trait Generator: Send + Sync {
    /// Returns the model identifier (e.g. `"gpt-4"`).
    fn model_name(&self) -> &str;

    /// Generate a completion for `prompt`. Called exactly once per answer.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Prefix of answers produced from a failed generation call.
pub const GENERATION_ERROR_PREFIX: &str = "[Error invoking LLM:";

/// Render a generation failure as answer text.
pub fn generation_error_text(message: impl std::fmt::Display) -> String {
    format!("{} {}]", GENERATION_ERROR_PREFIX, message)
}

/// Result of one compose step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Final answer text (generated, error text, or the fallback message).
    pub text: String,
    /// True when the generator returned blank text and `text` is the
    /// contact-form fallback.
    pub is_fallback: bool,
}

/// Generator that always fails; used when no provider is configured.
pub struct DisabledGenerator;

#[async_trait]
impl Generator for DisabledGenerator {
    fn model_name(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("generation provider is disabled")
    }
}
