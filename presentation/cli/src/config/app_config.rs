use super::environment::Environment;
use super::errors::ConfigError;
use super::gemini_config::GeminiConfig;

pub struct AppConfig {
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        Ok(Self {
            gemini: GeminiConfig::from_env(env)?,
        })
    }
}
