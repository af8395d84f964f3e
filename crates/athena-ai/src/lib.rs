//! Chat engine for the Athena consultation widget.
//!
//! Provides:
//! - The provider boundary (`ChatProvider` creates sessions, `ChatSession`
//!   sends one user turn)
//! - A Gemini implementation over the Generative Language API
//! - Credential lookup
//! - Session lifecycle management with failure recovery, and the
//!   `MessageRelay` that the UI calls once per user message

pub mod credentials;
pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{
    Fallbacks, MessageRelay, RelayError, SessionError, SessionManager, SessionStatus,
};

/// Creates conversation sessions with an LLM provider.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Open a new conversation configured with `spec`.
    ///
    /// The returned handle retains its own multi-turn history.
    async fn create_session(
        &self,
        credential: &str,
        spec: &SessionSpec,
    ) -> Result<Box<dyn ChatSession>, AiError>;
}

/// One live conversation with a provider.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Send one user turn and wait for the model's reply.
    async fn send(&mut self, text: &str) -> Result<ProviderReply, AiError>;
}

/// Fixed parameters a session is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSpec {
    pub model: String,
    pub system_instruction: String,
}

impl SessionSpec {
    pub fn new(model: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
        }
    }
}

/// Result of one successful round trip. `text` is `None` when the
/// provider answered without any usable text (e.g. a blocked prompt).
#[derive(Debug, Clone, Default)]
pub struct ProviderReply {
    pub text: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn accumulate(&mut self, other: &TokenUsage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else if e.is_decode() {
            AiError::ParseError(e.to_string())
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn usage_accumulates() {
        let mut total = TokenUsage::default();
        total.accumulate(&TokenUsage {
            input_tokens: 12,
            output_tokens: 30,
        });
        total.accumulate(&TokenUsage {
            input_tokens: 8,
            output_tokens: 10,
        });
        assert_eq!(total.input_tokens, 20);
        assert_eq!(total.output_tokens, 40);
    }

    #[test]
    fn error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::ApiError("HTTP 500".into()).to_string(),
            "API error: HTTP 500"
        );
        assert_eq!(
            AiError::Configuration("empty model".into()).to_string(),
            "Invalid configuration: empty model"
        );
    }
}
