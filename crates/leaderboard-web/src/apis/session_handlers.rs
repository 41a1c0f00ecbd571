use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};

use crate::{
    models::{api_response::ApiResponse, users::CurrentUser},
    AppState,
};

const TAG: &str = "session";

/// Get the current user
#[utoipa::path(
    get,
    tag = TAG,
    path = "/session",
    operation_id = "getSession",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<CurrentUser>)
    )
)]
pub(super) async fn get_session(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<ApiResponse<CurrentUser>> {
    let user_id = app_state.identity.current_user_id(&headers);
    Json(ApiResponse::ok(CurrentUser { user_id }))
}
