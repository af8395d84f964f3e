//! A single Gemini conversation and its turn history.

use std::fmt;

use athena_common::ChatMessage;

use super::client::GeminiClient;

/// One Gemini conversation.
///
/// History only grows after a round trip that produced text, so a failed
/// or empty turn never poisons later requests.
pub struct GeminiChat {
    pub(crate) client: GeminiClient,
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) system_instruction: String,
    pub(crate) history: Vec<ChatMessage>,
}

impl GeminiChat {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

impl fmt::Debug for GeminiChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiChat")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("history_len", &self.history.len())
            .finish()
    }
}
