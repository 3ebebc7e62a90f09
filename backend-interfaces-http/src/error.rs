use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use backend_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    Forbidden(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::NotOwner(err) => HttpError::Forbidden(err.to_string()),
            AppError::NotFound(_) => HttpError::NotFound(value.to_string()),
            AppError::TeamLocked | AppError::AlreadyClaimed | AppError::NotYetComplete => {
                HttpError::Conflict(value.to_string())
            }
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            AppError::NotEquipment | AppError::NotConsumable | AppError::SlotMismatch => {
                HttpError::BadRequest(value.to_string())
            }
            AppError::Internal(err) => {
                error!("internal error: {:#}", err);
                HttpError::Internal("internal error".to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
