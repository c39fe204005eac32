//! Career Compass HTTP server.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use career_compass::adapters::ai::{ChatCompletionsClient, ChatCompletionsConfig};
use career_compass::adapters::http::{api_router, ChatHandlers, QuizHandlers};
use career_compass::adapters::random::ThreadRngSource;
use career_compass::adapters::speech::HttpTranscriptionClient;
use career_compass::config::{AppConfig, ConfigError, QuizConfig, ValidationError};
use career_compass::domain::quiz::{CatalogError, QuestionCatalog};
use career_compass::ports::ServiceError;
use career_compass::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("service client: {0}")]
    Service(#[from] ServiceError),

    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("career-compass: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.server)?;

    let catalog = Arc::new(load_catalog(&config.quiz)?);

    let completion = ChatCompletionsClient::new(ChatCompletionsConfig::from_app_config(&config.ai)?)?;
    let transcription = HttpTranscriptionClient::from_app_config(&config.transcription)?;
    if !transcription.is_enabled() {
        warn!("No transcription endpoint configured; voice input is disabled");
    }

    let chat = ChatHandlers::new(
        Arc::new(completion),
        Arc::new(transcription),
        Arc::new(ThreadRngSource),
    )
    .with_history_limit(config.ai.history_limit);
    let quiz = QuizHandlers::new(catalog);
    let app = api_router(chat, quiz, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Career Compass listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn load_catalog(config: &QuizConfig) -> Result<QuestionCatalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = QuestionCatalog::from_yaml_file(path)?;
            info!(path = %path.display(), questions = catalog.len(), "Loaded quiz catalog");
            Ok(catalog)
        }
        None => Ok(QuestionCatalog::reference()),
    }
}
