use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homepage::config::Config;
use homepage::fetcher::Fetcher;
use homepage::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homepage=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path =
        std::env::var("HOMEPAGE_CONFIG").unwrap_or_else(|_| "homepage.toml".to_string());
    let config = Config::load(&config_path)?;
    info!(
        "Loaded profile '{}' with {} feeds from {}",
        config.profile.name,
        config.feeds.len(),
        config_path
    );

    let fetcher = Fetcher::new(config.fetch_timeout())?;
    let listen = config.listen.clone();

    let state = Arc::new(AppState {
        config: Arc::new(config),
        fetcher,
    });

    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("Server starting on http://{}", listen);

    axum::serve(listener, app).await?;

    Ok(())
}
