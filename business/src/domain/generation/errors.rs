/// Failures of a text generation call, split by who is at fault.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation.authentication: {message}")]
    Authentication { message: String },
    #[error("generation.quota_exceeded: {message}")]
    QuotaExceeded { message: String },
    #[error("generation.model_not_found: {model}")]
    ModelNotFound { model: String },
    #[error("generation.invalid_request: {message}")]
    InvalidRequest { message: String },
    #[error("generation.service ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("generation.network: {message}")]
    Network { message: String },
    #[error("generation.blocked: {reason}")]
    Blocked { reason: String },
    #[error("generation.malformed_response: {message}")]
    MalformedResponse { message: String },
}

impl GenerationError {
    /// True for rejections caused by the API key.
    pub fn is_authentication(&self) -> bool {
        matches!(self, GenerationError::Authentication { .. })
    }
}
