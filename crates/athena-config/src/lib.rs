//! Athena configuration system.
//!
//! Provides TOML-based configuration for the provider connection, the
//! assistant persona and the canned fallback replies. All config sections
//! use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use athena_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AthenaConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use athena_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented config file written on first use.
/// Unlike the loaders in [`toml_loader`], this validates strictly.
pub fn load_config(path: Option<&Path>) -> Result<AthenaConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AthenaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
