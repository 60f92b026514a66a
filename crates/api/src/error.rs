//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gymledger_core::collector::CollectError;
use gymledger_core::finance::FinanceError;
use gymledger_shared::{AppError, JwtError};
use serde_json::json;
use tracing::{error, warn};

/// An [`AppError`] rendered as `{ "error": CODE, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<FinanceError> for ApiError {
    fn from(err: FinanceError) -> Self {
        let app = match err {
            FinanceError::Scope(e) => AppError::Forbidden(e.to_string()),
            FinanceError::InvalidCriteria(e) => AppError::Validation(e.to_string()),
            FinanceError::Collect(CollectError::UnknownTenant(id)) => {
                AppError::NotFound(format!("Gym {id} does not exist"))
            }
            FinanceError::Collect(CollectError::Directory(e)) => {
                error!(error = %e, "Gym directory unavailable");
                AppError::Unavailable("Gym directory is unavailable".to_string())
            }
        };
        Self(app)
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        let message = match err {
            JwtError::Expired => "Token has expired",
            JwtError::DecodingError(_) | JwtError::EncodingError(_) => "Invalid or malformed token",
        };
        Self(AppError::Unauthorized(message.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &self.0 {
            AppError::Unauthorized(m)
            | AppError::Forbidden(m)
            | AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::Unavailable(m) => m.clone(),
            AppError::Internal(m) => {
                error!(error = %m, "Internal error");
                "An error occurred".to_string()
            }
        };

        if status.is_client_error() {
            warn!(status = status.as_u16(), code = self.0.error_code(), %message, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}
