pub mod app_config;
pub mod environment;
pub mod errors;
pub mod gemini_config;
