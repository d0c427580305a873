//! Credential lookup for the generation service
//!
//! The key is resolved at call time, not process start, and its absence is
//! a normal condition answered with fallback content rather than an error.

use std::env;

/// Where the service API key comes from.
pub trait CredentialSource: Send + Sync {
    /// The configured key, if any. Blank values count as absent.
    fn api_key(&self) -> Option<String>;
}

/// Reads `GEMINI_API_KEY` (or `API_KEY`) from the process environment on
/// every call.
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        non_blank("GEMINI_API_KEY").or_else(|| non_blank("API_KEY"))
    }
}

fn non_blank(var: &str) -> Option<String> {
    env::var(var).ok().filter(|key| !key.trim().is_empty())
}

/// A fixed key, or none. Lets tests pin credential state instead of
/// touching the process environment.
pub struct FixedCredentials(pub Option<String>);

impl CredentialSource for FixedCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_credentials() {
        assert_eq!(
            FixedCredentials(Some("abc".to_string())).api_key().as_deref(),
            Some("abc")
        );
        assert!(FixedCredentials(None).api_key().is_none());
    }

    // One sequential test for both variables; splitting it would race on
    // the shared process environment.
    #[test]
    fn test_env_credentials_lookup_order() {
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("API_KEY");
        assert!(EnvCredentials.api_key().is_none());

        env::set_var("API_KEY", "legacy-key");
        assert_eq!(EnvCredentials.api_key().as_deref(), Some("legacy-key"));

        env::set_var("GEMINI_API_KEY", "primary-key");
        assert_eq!(EnvCredentials.api_key().as_deref(), Some("primary-key"));

        // A blank primary falls through to the secondary instead of
        // masking it.
        env::set_var("GEMINI_API_KEY", "   ");
        assert_eq!(EnvCredentials.api_key().as_deref(), Some("legacy-key"));

        env::remove_var("API_KEY");
        assert!(EnvCredentials.api_key().is_none());

        env::remove_var("GEMINI_API_KEY");
    }
}
