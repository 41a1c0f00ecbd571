use std::sync::Arc;

use dotenv::dotenv;
use leaderboard_web::settings;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let settings = settings::load_settings()?;
    leaderboard_web::init_tracing(&settings);
    let port = settings.port.unwrap_or(3000);

    if !settings.is_production() {
        debug!("Running in {} environment", settings.environment());
    }

    let store = leaderboard_web::setup_database(&settings).await?;
    let state = Arc::new(leaderboard_web::setup_state(&settings, store.clone()));
    let app = leaderboard_web::setup_router(&settings, state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(leaderboard_web::shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    store.close().await;
    Ok(())
}
