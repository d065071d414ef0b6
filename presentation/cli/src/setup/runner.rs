use std::io::Write;

use business::domain::credential::model::API_KEY_VAR;
use business::domain::credential::use_cases::check::CheckCredentialParams;
use business::domain::generation::model::GenerationRequest;
use business::domain::generation::use_cases::generate::GenerateTextParams;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Runner;

impl Runner {
    /// Reports the credential, sends the greeting request and writes the reply.
    ///
    /// The credential line is always written. The reply line is only
    /// written when the request succeeds.
    pub async fn run<W: Write>(
        config: &AppConfig,
        container: &DependencyContainer,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let status = container
            .check_credential_use_case
            .execute(CheckCredentialParams {
                name: API_KEY_VAR.to_string(),
                credential: config.gemini.credential.clone(),
            });
        let present = status.as_ref().is_ok_and(|s| s.present);
        writeln!(out, "API Key loaded: {}", present)?;
        status?;

        let response = container
            .generate_text_use_case
            .execute(GenerateTextParams {
                request: GenerationRequest::greeting(),
            })
            .await?;

        writeln!(out, "{}", response.text)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::Environment;
    use business::domain::credential::errors::CredentialError;
    use business::domain::generation::errors::GenerationError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn config_for(server: &MockServer, extra: &[(&str, &str)]) -> AppConfig {
        let base_url = format!("{}/v1beta", server.uri());
        let mut pairs = vec![("GEMINI_BASE_URL".to_string(), base_url)];
        pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        AppConfig::from_env(&Environment::from_pairs(pairs)).unwrap()
    }

    async fn run(config: &AppConfig) -> (anyhow::Result<()>, String) {
        let container = DependencyContainer::new(config).unwrap();
        let mut out = Vec::new();
        let result = Runner::run(config, &container, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    async fn mount_auth_failure(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {
                    "code": 403,
                    "message": "Method doesn't allow unregistered callers",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn should_print_presence_and_generated_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "valid-key"))
            .and(body_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Say hello world in a creative way"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hello, world!"}]},
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let config = config_for(&server, &[("GEMINI_API_KEY", "valid-key")]);

        let (result, output) = run(&config).await;

        assert!(result.is_ok());
        assert_eq!(output, "API Key loaded: true\nHello, world!\n");
    }

    #[tokio::test]
    async fn should_attempt_request_and_fail_when_key_is_absent() {
        let server = MockServer::start().await;
        mount_auth_failure(&server).await;
        let config = config_for(&server, &[]);

        let (result, output) = run(&config).await;

        assert_eq!(output, "API Key loaded: false\n");
        let error = result.unwrap_err();
        assert!(
            error
                .downcast_ref::<GenerationError>()
                .is_some_and(GenerationError::is_authentication)
        );
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_fail_with_authentication_error_when_key_is_empty() {
        let server = MockServer::start().await;
        mount_auth_failure(&server).await;
        let config = config_for(&server, &[("GEMINI_API_KEY", "")]);

        let (result, output) = run(&config).await;

        assert_eq!(output, "API Key loaded: true\n");
        assert!(
            result
                .unwrap_err()
                .downcast_ref::<GenerationError>()
                .is_some_and(GenerationError::is_authentication)
        );
    }

    #[tokio::test]
    async fn should_fail_fast_without_request_when_key_is_required() {
        let server = MockServer::start().await;
        mount_auth_failure(&server).await;
        let config = config_for(&server, &[("GEMINI_REQUIRE_API_KEY", "true")]);

        let (result, output) = run(&config).await;

        assert_eq!(output, "API Key loaded: false\n");
        assert!(matches!(
            result.unwrap_err().downcast_ref::<CredentialError>(),
            Some(CredentialError::Missing { .. })
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
