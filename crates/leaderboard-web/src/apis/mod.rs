use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    pages::{self, fallback::trailing_slash_fallback},
    settings::SiteConfig,
    AppState,
};

pub mod api_models;
pub mod health_handlers;
pub mod session_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "health", description = "Backing service diagnostics"),
        (name = "session", description = "Current user")
    )
)]
pub struct ApiDoc;

/// Builds the whole site: JSON API, API docs, pages and static assets, all
/// mounted under the configured base path.
pub fn setup_routes(site: &SiteConfig, static_dir: &str) -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let health_router = OpenApiRouter::new().routes(routes!(health_handlers::check_mongodb));
    let session_router = OpenApiRouter::new().routes(routes!(session_handlers::get_session));

    let health_router =
        OpenApiRouter::with_openapi(api_doc.clone()).nest("/health", health_router);
    let session_router = OpenApiRouter::with_openapi(api_doc).merge(session_router);

    let router = OpenApiRouter::new()
        .merge(health_router)
        .merge(session_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    let site_router = Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
        .merge(pages::setup_page_routes())
        .nest_service("/static", ServeDir::new(static_dir));

    let router = if site.base_path.is_empty() {
        site_router
    } else {
        Router::new().nest(&site.base_path, site_router)
    };

    router.fallback(trailing_slash_fallback)
}
