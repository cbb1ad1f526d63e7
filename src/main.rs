//! Smart Quiz web front end

use anyhow::Result;
use clap::Parser;
use smart_quiz_web::{
    config::{Environment, Settings},
    logging::{init_tracing, LogFormat},
    server::App,
};

/// Smart Quiz web front end
///
/// Serves the home, quiz, login, and profile pages and fetches quizzes from
/// the quiz-generation service.
#[derive(Parser, Debug)]
#[command(name = "smart-quiz-web")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT env var)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Environment: dev, staging, prod (overrides ENVIRONMENT env var)
    #[arg(short, long)]
    env: Option<Environment>,

    /// Base URL of the quiz-generation service (overrides QUIZ_API_BASE_URL)
    #[arg(long)]
    quiz_api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load()?;

    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(env) = args.env {
        settings.environment = env;
    }
    if let Some(url) = args.quiz_api_url {
        settings.quiz_api.base_url = url;
    }

    init_tracing(&settings.log_level, LogFormat::for_environment(settings.environment));

    settings.validate()?;

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        environment = %settings.environment,
        host = %settings.host,
        port = %settings.port,
        quiz_api = %settings.quiz_api.base_url,
        "Starting application"
    );

    let app = App::new(settings)?;
    app.run_with_graceful_shutdown().await?;

    tracing::info!("Application shutdown complete");

    Ok(())
}
