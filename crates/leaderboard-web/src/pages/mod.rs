use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{settings::SiteConfig, AppState};

pub mod courses;
pub mod fallback;
pub mod stocks;

/// Values the shared `base.html` layout reads.
pub struct Layout {
    pub stylesheet: String,
}

impl Layout {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            stylesheet: site.asset_path("site.css"),
        }
    }
}

pub fn setup_page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses/", get(courses::course_dashboard))
        .route("/stocks/:ticker/", get(stocks::stock_detail))
}
