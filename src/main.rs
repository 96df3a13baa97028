use clap::Parser;
use feedback_insight::utils::{logger, validation::Validate};
use feedback_insight::{build_router, AnalysisPipeline, AppState, OpenAiClient, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse().overlay_env();

    logger::init_logger(config.verbose);

    tracing::info!("Starting feedback-insight server");
    if config.verbose {
        tracing::debug!(
            "Server config: port={} client_url={} row_limit={} uploads_dir={}",
            config.port,
            config.client_url,
            config.row_limit,
            config.uploads_dir
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }

    let api_key = config.resolve_api_key()?;
    let provider = OpenAiClient::new(&config.api_base_url, api_key)?;
    let pipeline = AnalysisPipeline::new(provider, config.row_limit);
    let state = AppState::new(pipeline, &config.uploads_dir);
    let router = build_router(state, &config.client_url)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server listening on http://localhost:{}", config.port);
    tracing::info!("📊 Health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, router).await?;
    Ok(())
}
