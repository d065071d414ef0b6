use async_trait::async_trait;

use super::errors::GenerationError;
use super::model::{GenerationRequest, GenerationResponse};

/// Service port for a remote text generation backend.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}
