use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::types::{ErrorDetail, ErrorResponse};

/// Body sent for every unexpected failure. Nothing about the cause leaks out.
pub const SERVER_ERROR_BODY: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0:?}")]
    Validation(Vec<ErrorDetail>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(errors))).into_response()
            }
            AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::single(msg))).into_response()
            }
        }
    }
}

/// Flatten validator output into one entry per failing field.
///
/// Entries follow `field_order`; fields not listed there come last, sorted by name.
pub fn field_errors(errors: &ValidationErrors, field_order: &[&str]) -> Vec<ErrorDetail> {
    let mut details: Vec<ErrorDetail> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                ErrorDetail::body_field(field.to_string(), msg)
            })
        })
        .collect();

    details.sort_by_key(|detail| {
        let param = detail.param.clone().unwrap_or_default();
        let rank = field_order
            .iter()
            .position(|f| *f == param)
            .unwrap_or(field_order.len());
        (rank, param)
    });
    details
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let response =
            AppError::Internal("connection refused to 10.0.0.3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, SERVER_ERROR_BODY);
    }

    #[tokio::test]
    async fn test_database_error_is_opaque() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, SERVER_ERROR_BODY);
    }

    #[tokio::test]
    async fn test_conflict_renders_single_message_with_bad_request() {
        let response = AppError::Conflict("User already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["errors"][0]["msg"], "User already exists");
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    }
}
