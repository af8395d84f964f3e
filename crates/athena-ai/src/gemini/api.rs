//! `ChatProvider` / `ChatSession` implementations for Gemini.

use async_trait::async_trait;
use athena_common::ChatMessage;
use tracing::debug;

use crate::{AiError, ChatProvider, ChatSession, ProviderReply, SessionSpec};

use super::chat::GeminiChat;
use super::client::GeminiClient;

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn create_session(
        &self,
        credential: &str,
        spec: &SessionSpec,
    ) -> Result<Box<dyn ChatSession>, AiError> {
        if credential.trim().is_empty() {
            return Err(AiError::Configuration("empty API key".into()));
        }
        if spec.model.trim().is_empty() {
            return Err(AiError::Configuration("empty model identifier".into()));
        }

        let http = self.build_http()?;
        debug!(model = %spec.model, "Gemini chat created");

        Ok(Box::new(GeminiChat {
            client: self.clone(),
            http,
            api_key: credential.to_string(),
            model: spec.model.clone(),
            system_instruction: spec.system_instruction.clone(),
            history: Vec::new(),
        }))
    }
}

#[async_trait]
impl ChatSession for GeminiChat {
    async fn send(&mut self, text: &str) -> Result<ProviderReply, AiError> {
        let body = self
            .client
            .build_request_body(&self.system_instruction, &self.history, text);
        let url = self.client.api_url(&self.model);

        debug!(model = %self.model, turns = self.history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let reply = self.client.parse_response(&json)?;

        // Only exchanges with a usable answer become context for later turns.
        if let Some(answer) = reply.text.as_deref().filter(|t| !t.trim().is_empty()) {
            self.history.push(ChatMessage::user(text));
            self.history.push(ChatMessage::model(answer));
        }

        Ok(reply)
    }
}
