use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared Gemini HTTP client configuration.
///
/// Building the client performs no I/O and does not validate the key;
/// the service rejects a bad or missing key on first use.
pub struct GeminiClient {
    pub client: Client,
    api_key: Option<SecretString>,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.map(SecretString::new),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Header carrying the API key, if one was configured.
    pub fn auth_header(&self) -> Option<(&'static str, &str)> {
        self.api_key
            .as_ref()
            .map(|key| (API_KEY_HEADER, key.expose_secret().as_str()))
    }

    /// Returns the generateContent endpoint URL for a model.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}
