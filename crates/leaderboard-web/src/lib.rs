use std::sync::Arc;

use apis::setup_routes;
use axum::Router;
use repositories::document_store::{DocumentStore, MongoStore};
use services::{
    content_service::ContentService,
    health_service::HealthService,
    identity_service::{IdentityProvider, PlaceholderIdentity},
};
use settings::{Settings, SiteConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utils::errors::store_error::StoreError;

pub mod apis;
pub mod components;
pub mod models;
pub mod pages;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub site: SiteConfig,
    pub health_service: HealthService,
    pub identity: Arc<dyn IdentityProvider>,
}

pub async fn setup_database(settings: &Settings) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let store: Arc<dyn DocumentStore> =
        Arc::new(MongoStore::connect(&settings.mongodb_uri, settings.database_name()).await?);
    Ok(store)
}

pub fn setup_state(settings: &Settings, store: Arc<dyn DocumentStore>) -> AppState {
    let content_service = ContentService::new(store.clone());
    let health_service = HealthService::new(store, content_service);
    let identity = Arc::new(PlaceholderIdentity::new(settings.placeholder_user_id()));

    AppState {
        site: settings.site_config(),
        health_service,
        identity,
    }
}

pub fn setup_router(settings: &Settings, state: Arc<AppState>) -> Router {
    info!(
        base_path = %state.site.base_path,
        static_dir = settings.static_dir(),
        "Mounting routes"
    );

    setup_routes(&state.site, settings.static_dir())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn init_tracing(settings: &Settings) {
    let env = settings.environment().to_uppercase();
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
