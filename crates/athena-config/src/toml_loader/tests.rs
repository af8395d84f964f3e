//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_athena_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, athena_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[provider]
model = "gemini-2.0-flash"
api_key_env = "GEMINI_API_KEY"

[persona]
name = "Minerva"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.provider.model, "gemini-2.0-flash");
    assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.persona.name, "Minerva");
    // Defaults preserved
    assert_eq!(config.provider.max_output_tokens, 4096);
    assert_eq!(config.persona.title, "Senior Visa Specialist");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, athena_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[provider]
temperature = 9.5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.provider.temperature, 9.5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("athena").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.provider.model, "gemini-2.5-flash");
    assert_eq!(config.persona.name, "Athena");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::AthenaConfig;

    let config: AthenaConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.provider.api_key_env, "API_KEY");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("athena"));
        assert!(path_str.ends_with("config.toml"));
    }
}
