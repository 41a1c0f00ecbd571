use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("An error occurred while rendering the page")]
    TemplateError(#[from] askama::Error),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::TemplateError(_) => "TEMPLATE_ERROR",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        if status.is_server_error() {
            match &self {
                AppError::TemplateError(e) => error!("Template error: {}", e),
                _ => error!("{}", self),
            }
        }

        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn renders_error_payload() {
        let response = AppError::BadRequest("Invalid ticker".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: ErrorPayload = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.message, "Bad request: Invalid ticker");
        assert_eq!(payload.code, 400);
        assert_eq!(payload.r#type, "BAD_REQUEST");
        assert!(payload.details.is_none());
    }

    #[tokio::test]
    async fn template_errors_hide_details() {
        let response = AppError::from(askama::Error::Fmt(std::fmt::Error)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: ErrorPayload = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.message, "An error occurred while rendering the page");
        assert_eq!(payload.r#type, "TEMPLATE_ERROR");
    }
}
