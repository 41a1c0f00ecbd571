use std::sync::Arc;

use askama::Template;
use axum::{extract::State, http::HeaderMap, response::Html};
use tracing::debug;

use crate::{utils::errors::app_error::AppError, AppState};

use super::Layout;

/// Course dashboard shell. The dashboard widget and the achievements modal
/// are mounted client-side onto the elements carrying `data-user-id`.
#[derive(Template)]
#[template(path = "courses.html")]
pub struct CourseDashboardPage {
    pub layout: Layout,
    pub user_id: String,
    pub session_url: String,
}

pub(super) async fn course_dashboard(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let user_id = app_state.identity.current_user_id(&headers);
    debug!(user_id = %user_id, "Rendering course dashboard");

    let page = CourseDashboardPage {
        layout: Layout::new(&app_state.site),
        user_id,
        session_url: app_state.site.api_path("v1/session"),
    };

    Ok(Html(page.render()?))
}
