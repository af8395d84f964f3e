//! Provider credential lookup.

use std::fmt;

/// Where the provider API key comes from.
pub trait CredentialSource: Send + Sync {
    /// The credential, or `None` when it is not configured.
    fn credential(&self) -> Option<String>;

    /// Human-readable origin, used in error messages. Never the secret.
    fn describe(&self) -> String;
}

/// Reads the credential from an environment variable on every lookup.
///
/// Empty or whitespace-only values count as missing.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new("API_KEY")
    }
}

impl CredentialSource for EnvCredential {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }
}

/// A fixed credential supplied by the embedding application.
#[derive(Clone)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    /// A source that never yields a credential.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.0.as_ref().map(|_| "[REDACTED]");
        f.debug_tuple("StaticCredential").field(&shown).finish()
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> Option<String> {
        self.0.clone().filter(|v| !v.trim().is_empty())
    }

    fn describe(&self) -> String {
        "static credential".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_credential_reads_variable() {
        std::env::set_var("ATHENA_TEST_KEY_PRESENT", "  secret-key  ");
        let source = EnvCredential::new("ATHENA_TEST_KEY_PRESENT");
        assert_eq!(source.credential().as_deref(), Some("secret-key"));
    }

    #[test]
    fn env_credential_missing_variable() {
        std::env::remove_var("ATHENA_TEST_KEY_ABSENT");
        let source = EnvCredential::new("ATHENA_TEST_KEY_ABSENT");
        assert!(source.credential().is_none());
        assert_eq!(
            source.describe(),
            "environment variable ATHENA_TEST_KEY_ABSENT"
        );
    }

    #[test]
    fn env_credential_blank_is_missing() {
        std::env::set_var("ATHENA_TEST_KEY_BLANK", "   ");
        let source = EnvCredential::new("ATHENA_TEST_KEY_BLANK");
        assert!(source.credential().is_none());
    }

    #[test]
    fn default_env_var_is_api_key() {
        assert_eq!(EnvCredential::default().var(), "API_KEY");
    }

    #[test]
    fn static_credential_redacts_debug() {
        let source = StaticCredential::new("super-secret");
        assert_eq!(source.credential().as_deref(), Some("super-secret"));
        let debug = format!("{source:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
        assert!(StaticCredential::missing().credential().is_none());
    }
}
