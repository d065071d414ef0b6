/// Model used for every request.
pub const GREETING_MODEL: &str = "gemini-2.0-flash";

/// Prompt sent with every request.
pub const GREETING_PROMPT: &str = "Say hello world in a creative way";

/// A single-turn generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// The fixed greeting request.
    pub fn greeting() -> Self {
        Self::new(GREETING_MODEL, GREETING_PROMPT)
    }
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u32>,
    pub candidates_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    pub text: String,
    pub model_version: Option<String>,
    pub usage: Option<TokenUsage>,
}
