//! Configuration schema types for Athena.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the site ships with.

mod persona;
mod provider;
mod system;

pub use persona::*;
pub use provider::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Athena.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AthenaConfig {
    pub provider: ProviderConfig,
    pub persona: PersonaConfig,
    pub fallbacks: FallbacksConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_settings() {
        let config = AthenaConfig::default();
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert_eq!(config.provider.api_key_env, "API_KEY");
        assert_eq!(config.provider.connect_timeout_secs, 10);
        assert_eq!(config.provider.request_timeout_secs, 120);
    }

    #[test]
    fn default_persona_is_athena() {
        let config = AthenaConfig::default();
        assert_eq!(config.persona.name, "Athena");
        assert!(config.persona.system_instruction.contains("Elite Visa Consultants"));
        assert!(config.persona.greeting.starts_with("Welcome to Elite Visa Consultants"));
    }

    #[test]
    fn default_fallbacks_match_shared_texts() {
        let config = AthenaConfig::default();
        assert_eq!(
            config.fallbacks.reconnecting,
            athena_common::fallback::RECONNECTING
        );
        assert_eq!(
            config.fallbacks.connection_issue,
            athena_common::fallback::CONNECTION_ISSUE
        );
        assert_eq!(
            config.fallbacks.empty_response,
            athena_common::fallback::EMPTY_RESPONSE
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AthenaConfig = toml::from_str(
            r#"
[provider]
model = "gemini-2.0-flash"
"#,
        )
        .unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.api_key_env, "API_KEY");
        assert_eq!(config.persona.name, "Athena");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: AthenaConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
