use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::text_generator::TextGeneratorGemini;

use business::application::credential::check::CheckCredentialUseCaseImpl;
use business::application::generation::generate::GenerateTextUseCaseImpl;
use business::domain::credential::use_cases::check::CheckCredentialUseCase;
use business::domain::generation::use_cases::generate::GenerateTextUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub check_credential_use_case: Arc<dyn CheckCredentialUseCase>,
    pub generate_text_use_case: Arc<dyn GenerateTextUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(
            config.gemini.credential.expose().map(str::to_string),
            config.gemini.base_url.clone(),
            config.gemini.timeout,
        )?;
        let text_generator = Arc::new(TextGeneratorGemini::new(gemini_client));

        // Use cases
        let check_credential_use_case = Arc::new(CheckCredentialUseCaseImpl {
            policy: config.gemini.policy,
            logger: logger.clone(),
        });
        let generate_text_use_case = Arc::new(GenerateTextUseCaseImpl {
            generator: text_generator,
            logger,
        });

        Ok(Self {
            check_credential_use_case,
            generate_text_use_case,
        })
    }
}
