//! Validation for the `[provider]` section.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::AthenaConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Model ids are path segments in the API URL, e.g. `gemini-2.5-flash`.
static MODEL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9.\-]*$").unwrap());

/// Environment variable names: letters, digits, underscore; no leading digit.
static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &AthenaConfig) {
    let provider = &config.provider;

    if !MODEL_ID_RE.is_match(&provider.model) {
        errors.push(format!(
            "provider.model = {:?} is not a valid model identifier",
            provider.model
        ));
    }
    if !ENV_VAR_RE.is_match(&provider.api_key_env) {
        errors.push(format!(
            "provider.api_key_env = {:?} is not a valid environment variable name",
            provider.api_key_env
        ));
    }
    validate_not_blank(errors, "provider.base_url", &provider.base_url);
    if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
        errors.push(format!(
            "provider.base_url = {:?} must be an http(s) URL",
            provider.base_url
        ));
    }

    validate_range(
        errors,
        "provider.max_output_tokens",
        provider.max_output_tokens,
        1,
        65536,
    );
    validate_range_f64(errors, "provider.temperature", provider.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "provider.request_timeout_secs",
        provider.request_timeout_secs,
        5,
        600,
    );
}
