use async_trait::async_trait;

use crate::domain::generation::errors::GenerationError;
use crate::domain::generation::model::{GenerationRequest, GenerationResponse};

pub struct GenerateTextParams {
    pub request: GenerationRequest,
}

#[async_trait]
pub trait GenerateTextUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateTextParams,
    ) -> Result<GenerationResponse, GenerationError>;
}
