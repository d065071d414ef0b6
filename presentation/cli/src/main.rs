mod config;
mod setup;

use config::{app_config::AppConfig, environment::Environment};
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// CLI Entry Point
///
/// Loads configuration, reports whether the Gemini API key is set, sends one
/// fixed prompt and prints the generated text.
///
/// - config/: Environment snapshot and typed configuration
/// - setup/: Dependency wiring and the single request/response run
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr so stdout stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment snapshot (host variables over .env)
    let env = Environment::load()?;

    // 3. Load configuration
    let config = AppConfig::from_env(&env)?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run
    let mut stdout = std::io::stdout();
    Runner::run(&config, &container, &mut stdout).await?;

    Ok(())
}
