//! Persona and canned-reply configuration.

use athena_common::fallback;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"You are "Athena", the Senior Visa Specialist for Elite Visa Consultants.
Your tone is professional, sophisticated, yet accessible and reassuring.
You assist clients with questions about global visa requirements, immigration procedures, and travel documentation.

Key guidelines:
- Be concise but thorough.
- Use professional formatting (bullet points where appropriate).
- If a user asks for legal advice, clarify that you are an AI consultant and they should book a formal legal consultation for binding advice.
- Emphasize "Elite Visa Consultants" premium services for complex cases (Golden Visas, US Green Cards, Corporate transfers).

Your goal is to build trust and demonstrate expertise."#;

pub const DEFAULT_GREETING: &str = "Welcome to Elite Visa Consultants. I am Athena, your AI specialist. How may I assist with your global mobility needs today?";

/// Who the assistant presents itself as.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub name: String,
    pub title: String,
    /// Fixed instruction supplied once at session creation.
    pub system_instruction: String,
    /// First model message shown in a fresh transcript.
    pub greeting: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "Athena".into(),
            title: "Senior Visa Specialist".into(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.into(),
            greeting: DEFAULT_GREETING.into(),
        }
    }
}

/// Replies shown instead of a model answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbacksConfig {
    pub reconnecting: String,
    pub connection_issue: String,
    pub empty_response: String,
}

impl Default for FallbacksConfig {
    fn default() -> Self {
        Self {
            reconnecting: fallback::RECONNECTING.into(),
            connection_issue: fallback::CONNECTION_ISSUE.into(),
            empty_response: fallback::EMPTY_RESPONSE.into(),
        }
    }
}
