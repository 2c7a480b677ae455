//! Advisor configuration
//!
//! Read from the environment. The API key is optional: without it the
//! advisor answers with a fixed "not configured" message and never touches
//! the network.

use serde::{Deserialize, Serialize};

/// Primary variable holding the service API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Fallback variable for the API key.
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "HEELTAP_ADVICE_MODEL";
pub const ENDPOINT_VAR: &str = "HEELTAP_ADVICE_ENDPOINT";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Advisor configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// API key for the text-generation service
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`
    pub model: String,
    /// Base URL of the service, without trailing slash
    pub endpoint: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            api_key: non_empty_var(API_KEY_VAR).or_else(|| non_empty_var(API_KEY_FALLBACK_VAR)),
            model: non_empty_var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: non_empty_var(ENDPOINT_VAR)
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

impl AdvisorConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific endpoint and model, with no key
    pub fn new(endpoint: &str, model: &str) -> Self {
        AdvisorConfig {
            api_key: None,
            model: model.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Set the API key. Empty keys count as absent.
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.trim().to_string()).filter(|k| !k.is_empty());
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the generate-content call for the configured model.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_has_no_key() {
        let config = AdvisorConfig::new("http://localhost:8080/", "test-model");
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.model, "test-model");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_config_with_api_key() {
        let config = AdvisorConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL).with_api_key("secret");
        assert_eq!(config.api_key, Some("secret".to_string()));
        assert!(config.is_configured());
    }

    #[test]
    fn test_blank_key_counts_as_absent() {
        let config = AdvisorConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL).with_api_key("   ");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_generate_url() {
        let config = AdvisorConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL);
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AdvisorConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL).with_api_key("hunter2");
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }

    /// The only test here that touches the process environment.
    #[test]
    fn test_from_env_resolution() {
        let vars = [API_KEY_VAR, API_KEY_FALLBACK_VAR, MODEL_VAR, ENDPOINT_VAR];
        let clear = || {
            for var in vars {
                std::env::remove_var(var);
            }
        };

        clear();
        let config = AdvisorConfig::from_env();
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        std::env::set_var(API_KEY_FALLBACK_VAR, "fallback-key");
        assert_eq!(
            AdvisorConfig::from_env().api_key.as_deref(),
            Some("fallback-key")
        );

        std::env::set_var(API_KEY_VAR, " primary-key ");
        assert_eq!(
            AdvisorConfig::from_env().api_key.as_deref(),
            Some("primary-key")
        );

        // A blank primary falls through to the fallback.
        std::env::set_var(API_KEY_VAR, "   ");
        assert_eq!(
            AdvisorConfig::from_env().api_key.as_deref(),
            Some("fallback-key")
        );

        std::env::set_var(API_KEY_FALLBACK_VAR, "");
        assert!(!AdvisorConfig::from_env().is_configured());

        std::env::set_var(MODEL_VAR, "gemini-test");
        std::env::set_var(ENDPOINT_VAR, "http://127.0.0.1:9000/v1//");
        let config = AdvisorConfig::from_env();
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/v1");
        assert_eq!(
            config.generate_url(),
            "http://127.0.0.1:9000/v1/models/gemini-test:generateContent"
        );

        std::env::set_var(MODEL_VAR, " ");
        assert_eq!(AdvisorConfig::from_env().model, DEFAULT_MODEL);

        clear();
    }

    #[test]
    fn test_serialize_skips_key() {
        let config = AdvisorConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL).with_api_key("hunter2");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
