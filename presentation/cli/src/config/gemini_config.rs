use std::time::Duration;

use business::domain::credential::model::{API_KEY_VAR, Credential, CredentialPolicy};
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use super::environment::Environment;
use super::errors::ConfigError;

pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";
pub const REQUIRE_KEY_VAR: &str = "GEMINI_REQUIRE_API_KEY";

/// Configuration for Gemini API access.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub credential: Credential,
    pub base_url: String,
    pub timeout: Duration,
    pub policy: CredentialPolicy,
}

impl GeminiConfig {
    /// Load Gemini configuration from the environment snapshot
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (optional, presence is reported)
    /// - GEMINI_BASE_URL: API root (default: "https://generativelanguage.googleapis.com/v1beta")
    /// - GEMINI_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    /// - GEMINI_REQUIRE_API_KEY: Fail before the request when the key is missing (default: false)
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        let credential = Credential::new(env.get(API_KEY_VAR).map(str::to_string));

        let base_url = env
            .get(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        let timeout = match env.get(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| invalid(TIMEOUT_VAR, raw))?,
            None => DEFAULT_TIMEOUT,
        };

        let policy = match env.get(REQUIRE_KEY_VAR) {
            Some(raw) => {
                if parse_bool(raw).ok_or_else(|| invalid(REQUIRE_KEY_VAR, raw))? {
                    CredentialPolicy::Require
                } else {
                    CredentialPolicy::Report
                }
            }
            None => CredentialPolicy::Report,
        };

        Ok(Self {
            credential,
            base_url,
            timeout,
            policy,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
