use anyhow::{Context, Result};
use tracing::info;

use conference_registration::checkout::CheckoutClient;
use conference_registration::config::Config;
use conference_registration::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("conference_registration=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        api_url = %config.api_url,
        default_language = %config.default_language,
        "Starting conference registration service"
    );

    let client = CheckoutClient::new(&config)?;
    let app = web::router(AppState::new(&config, client));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
