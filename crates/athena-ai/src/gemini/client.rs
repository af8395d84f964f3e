//! Gemini API client struct, request building, and response parsing.

use athena_common::{ChatMessage, ChatRole};
use tracing::debug;

use crate::{AiError, ProviderReply, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client. Creates [`GeminiChat`](super::GeminiChat) sessions.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn build_http(&self) -> Result<reqwest::Client, AiError> {
        reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| AiError::Configuration(format!("failed to build HTTP client: {e}")))
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        text: &str,
    ) -> serde_json::Value {
        let mut contents: Vec<_> = history
            .iter()
            .map(|msg| {
                let role = match msg.role() {
                    ChatRole::User => "user",
                    ChatRole::Model => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.text() }]
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": text }]
        }));

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_instruction }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// A response without candidates is not an error; it yields no text.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<ProviderReply, AiError> {
        if !json.is_object() {
            return Err(AiError::ParseError("response is not a JSON object".into()));
        }

        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            debug!(reason, "Gemini blocked the prompt");
        }

        let mut content = String::new();
        if let Some(parts) = json["candidates"][0]["content"]["parts"].as_array() {
            for part in parts {
                if let Some(text) = part["text"].as_str() {
                    content.push_str(text);
                }
            }
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(ProviderReply {
            text: (!content.is_empty()).then_some(content),
            usage,
        })
    }
}
