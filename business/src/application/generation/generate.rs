use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::generation::errors::GenerationError;
use crate::domain::generation::model::GenerationResponse;
use crate::domain::generation::services::TextGeneratorService;
use crate::domain::generation::use_cases::generate::{GenerateTextParams, GenerateTextUseCase};
use crate::domain::logger::Logger;

pub struct GenerateTextUseCaseImpl {
    pub generator: Arc<dyn TextGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateTextUseCase for GenerateTextUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateTextParams,
    ) -> Result<GenerationResponse, GenerationError> {
        let request = params.request;

        if request.model.trim().is_empty() {
            return Err(GenerationError::InvalidRequest {
                message: "model identifier is empty".to_string(),
            });
        }
        if request.prompt.trim().is_empty() {
            return Err(GenerationError::InvalidRequest {
                message: "prompt is empty".to_string(),
            });
        }

        self.logger
            .info(&format!("Generating text with model: {}", request.model));

        let response = match self.generator.generate(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.logger.error(&format!("Generation failed: {}", e));
                return Err(e);
            }
        };

        if let Some(usage) = &response.usage {
            self.logger.debug(&format!(
                "Token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_tokens, usage.candidates_tokens, usage.total_tokens
            ));
        }

        self.logger.info(&format!(
            "Generated {} characters (model version: {})",
            response.text.chars().count(),
            response.model_version.as_deref().unwrap_or("unknown")
        ));

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::model::{GenerationRequest, TokenUsage};
    use mockall::mock;

    mock! {
        pub TextGenerator {}

        #[async_trait]
        impl TextGeneratorService for TextGenerator {
            async fn generate(
                &self,
                request: &GenerationRequest,
            ) -> Result<GenerationResponse, GenerationError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn hello_response() -> GenerationResponse {
        GenerationResponse {
            text: "Hello, world!".to_string(),
            model_version: Some("gemini-2.0-flash".to_string()),
            usage: Some(TokenUsage {
                prompt_tokens: Some(8),
                candidates_tokens: Some(4),
                total_tokens: Some(12),
            }),
        }
    }

    #[tokio::test]
    async fn should_return_text_when_generator_succeeds() {
        let mut mock_generator = MockTextGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Ok(hello_response()));

        let use_case = GenerateTextUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::greeting(),
            })
            .await;

        assert_eq!(result.unwrap().text, "Hello, world!");
    }

    #[tokio::test]
    async fn should_pass_fixed_model_and_prompt_to_generator() {
        let mut mock_generator = MockTextGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|request| {
                request.model == "gemini-2.0-flash"
                    && request.prompt == "Say hello world in a creative way"
            })
            .times(1)
            .returning(|_| Ok(hello_response()));

        let use_case = GenerateTextUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::greeting(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_authentication_error() {
        let mut mock_generator = MockTextGenerator::new();
        mock_generator.expect_generate().returning(|_| {
            Err(GenerationError::Authentication {
                message: "API key not valid".to_string(),
            })
        });

        let use_case = GenerateTextUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::greeting(),
            })
            .await;

        assert!(result.unwrap_err().is_authentication());
    }

    #[tokio::test]
    async fn should_reject_blank_prompt_without_calling_generator() {
        let mock_generator = MockTextGenerator::new();

        let use_case = GenerateTextUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::new("gemini-2.0-flash", "   "),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::InvalidRequest { .. }
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_model_without_calling_generator() {
        let mock_generator = MockTextGenerator::new();

        let use_case = GenerateTextUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::new("", "hello"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::InvalidRequest { .. }
        ));
    }
}
