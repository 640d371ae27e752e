use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use replay_api::catalog::Catalog;
use replay_api::config::Config;
use replay_api::routes::create_router;
use replay_api::services::{EngineOptions, RecommendationEngine};
use replay_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Catalog load and scaler fit must both finish before the listener
    // binds; the engine is immutable from here on.
    let catalog = Catalog::load_csv(&config.dataset_path)?;
    tracing::info!(games = catalog.len(), path = %config.dataset_path, "Catalog loaded");

    let engine = RecommendationEngine::new(
        catalog,
        EngineOptions {
            match_cutoff: config.match_cutoff,
            include_genre_detail: config.include_genre_detail,
        },
    );
    let state = AppState::new(engine);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
