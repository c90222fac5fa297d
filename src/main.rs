use clap::Parser;
use marketing_planner::utils::{logger, validation::Validate};
use marketing_planner::{build_router, AppError, AppState, CliConfig, ContentService, GeminiGenerator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = CliConfig::parse();
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.verbose, settings.json_logs);

    tracing::info!("Starting marketing-planner v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let generator = GeminiGenerator::from_settings(&settings.provider);
    if settings.provider.api_key.is_none() {
        let missing = AppError::MissingConfigError {
            field: "GOOGLE_API_KEY".to_string(),
        };
        tracing::warn!("{}; generation requests will fail", missing);
        tracing::warn!("💡 Suggestion: {}", missing.recovery_suggestion());
    }

    let service = ContentService::new(Arc::new(generator))
        .with_json_tables(settings.convert_json_tables);
    let app = build_router(AppState::new(service));

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("🚀 Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
