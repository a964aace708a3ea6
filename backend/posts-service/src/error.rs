/// Error types for Posts Service
///
/// Every error is reported synchronously in the response body. Client errors
/// use `{"error": ...}`, except unknown post ids which answer
/// `{"message": "Post not found"}`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Required fields missing on create
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// Unsupported sort field or direction
    #[error("{0}")]
    InvalidQuery(String),

    /// No post with the requested id
    #[error("Post not found")]
    NotFound,

    /// Malformed request body or query string
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// `{"error": "..."}` body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": "..."}` body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidQuery(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        match self {
            AppError::NotFound => HttpResponse::build(status).json(MessageBody {
                message: self.to_string(),
            }),
            _ => HttpResponse::build(status).json(ErrorBody {
                error: self.to_string(),
            }),
        }
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
