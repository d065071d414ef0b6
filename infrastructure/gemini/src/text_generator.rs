use async_trait::async_trait;

use business::domain::generation::errors::GenerationError;
use business::domain::generation::model::{GenerationRequest, GenerationResponse, TokenUsage};
use business::domain::generation::services::TextGeneratorService;

use crate::client::GeminiClient;
use crate::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::error_mapper::{map_status, map_transport};

pub struct TextGeneratorGemini {
    client: GeminiClient,
}

impl TextGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<GenerationResponse, GenerationError> {
        let data: GenerateContentResponse =
            serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse {
                message: e.to_string(),
            })?;

        let Some(text) = data.text() else {
            if data.candidates.is_empty() {
                if let Some(reason) = data.prompt_feedback.and_then(|f| f.block_reason) {
                    return Err(GenerationError::Blocked { reason });
                }
            }
            let finish_reason = data
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "none".to_string());
            return Err(GenerationError::MalformedResponse {
                message: format!("no text in response (finish reason: {})", finish_reason),
            });
        };

        let usage = data.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            candidates_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(GenerationResponse {
            text,
            model_version: data.model_version,
            usage,
        })
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorGemini {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let body = GenerateContentRequest::from_prompt(&request.prompt);

        let mut builder = self
            .client
            .client
            .post(self.client.generate_content_url(&request.model))
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some((name, value)) = self.client.auth_header() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_transport)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport)?;

        if !status.is_success() {
            return Err(map_status(status.as_u16(), &text, &request.model));
        }

        Self::parse_response(&text)
    }
}
