mod app;
mod config;
mod domain;
mod error;
mod estimation;
mod logging;
mod middleware;
mod routes;

use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings);

    tracing::info!(
        env = settings.env.as_str(),
        server_addr = %settings.server_addr,
        static_dir = %settings.static_dir,
        "Starting blueprint estimator"
    );

    let state = app::AppState::new(settings.clone());
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
