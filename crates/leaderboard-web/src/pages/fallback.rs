use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::{utils::errors::app_error::AppError, AppState};

/// Sends page requests missing their trailing slash to the canonical URL.
/// Everything else that matched no route is a 404.
pub async fn trailing_slash_fallback(
    State(app_state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match app_state.site.slash_redirect(uri.path(), uri.query()) {
        Some(location) => {
            debug!(from = %uri, to = %location, "Adding trailing slash");
            Redirect::permanent(&location).into_response()
        }
        None => AppError::NotFound(format!("No route for {}", uri.path())).into_response(),
    }
}
