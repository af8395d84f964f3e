//! Full configuration validation.
//!
//! Validates numeric ranges, the model identifier and the user-facing
//! texts. Each section has its own submodule; this orchestrator calls
//! them all and collects errors into a single `ConfigError`.

mod helpers;
mod persona;
mod provider;


use crate::schema::AthenaConfig;
use athena_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AthenaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    provider::validate_provider(&mut errors, config);
    persona::validate_persona(&mut errors, config);
    persona::validate_fallbacks(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
