use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::AppState;

use super::api_models::response::{MongoHealthFailure, MongoHealthSuccess};

const TAG: &str = "health";

/// Check MongoDB connectivity
///
/// Pings the database and counts the documents of the course collections.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/mongodb",
    operation_id = "checkMongodb",
    responses(
        (status = 200, description = "Database reachable", body = MongoHealthSuccess),
        (status = 500, description = "Database unreachable or query failed", body = MongoHealthFailure)
    )
)]
pub(super) async fn check_mongodb(
    State(app_state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<MongoHealthSuccess>), (StatusCode, Json<MongoHealthFailure>)> {
    match app_state.health_service.check_mongodb().await {
        Ok(report) => {
            info!(
                database = %report.database,
                content = report.content.documents,
                user_stats = report.user_stats.documents,
                user_progress = report.user_progress.documents,
                "MongoDB connectivity check passed"
            );
            Ok((StatusCode::OK, Json(report.into())))
        }
        Err(e) => {
            error!("MongoDB connectivity check failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MongoHealthFailure::new(e.public_message())),
            ))
        }
    }
}
