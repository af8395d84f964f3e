//! Builds the chat relay from configuration.

use std::sync::Arc;
use std::time::Duration;

use athena_ai::{
    EnvCredential, Fallbacks, GeminiClient, GeminiConfig, MessageRelay, SessionManager,
    SessionSpec,
};
use athena_common::errors::ConfigError;
use athena_config::AthenaConfig;

pub fn gemini_config(config: &AthenaConfig) -> GeminiConfig {
    let provider = &config.provider;
    GeminiConfig::new()
        .with_base_url(provider.base_url.clone())
        .with_max_tokens(provider.max_output_tokens)
        .with_temperature(provider.temperature)
        .with_connect_timeout(Duration::from_secs(provider.connect_timeout_secs.into()))
        .with_request_timeout(Duration::from_secs(provider.request_timeout_secs.into()))
}

pub fn session_spec(config: &AthenaConfig) -> SessionSpec {
    SessionSpec::new(
        config.provider.model.clone(),
        config.persona.system_instruction.clone(),
    )
}

pub fn fallbacks(config: &AthenaConfig) -> Fallbacks {
    Fallbacks {
        reconnecting: config.fallbacks.reconnecting.clone(),
        connection_issue: config.fallbacks.connection_issue.clone(),
        empty_response: config.fallbacks.empty_response.clone(),
    }
}

/// Apply command-line overrides and re-run validation on the result.
pub fn apply_overrides(
    mut config: AthenaConfig,
    model: Option<String>,
) -> Result<AthenaConfig, ConfigError> {
    if let Some(model) = model {
        tracing::info!("Model override: {model}");
        config.provider.model = model;
    }
    athena_config::validation::validate(&config)?;
    Ok(config)
}

/// Wire the Gemini provider, the credential source and the fallbacks.
pub fn build_relay(config: &AthenaConfig) -> MessageRelay {
    let provider = Arc::new(GeminiClient::new(gemini_config(config)));
    let credentials = Box::new(EnvCredential::new(config.provider.api_key_env.clone()));
    let manager = SessionManager::new(provider, credentials, session_spec(config));
    MessageRelay::with_fallbacks(manager, fallbacks(config))
}
