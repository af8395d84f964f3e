//! LLM provider connection settings.

use serde::{Deserialize, Serialize};

/// Generative Language API endpoint for model calls.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Model identifier sent with every session.
    pub model: String,
    /// Environment variable holding the API credential.
    pub api_key_env: String,
    pub base_url: String,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-60.
    pub connect_timeout_secs: u32,
    /// Valid range: 5-600.
    pub request_timeout_secs: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_key_env: "API_KEY".into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_output_tokens: 4096,
            temperature: 0.7,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
