use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::telemetry::NOT_FOUND_CNTR;

// Error details are logged, clients only get these.
pub const INTERNAL_ERROR_DETAIL: &str = "Wystąpił błąd serwera.";
pub const UNAVAILABLE_DETAIL: &str = "Baza danych jest niedostępna.";

#[derive(Debug)]
pub enum ApiError {
    QuestionNotFound(i64),
    DataBaseError(sqlx::Error),
    StoreUnavailable(sqlx::Error),
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::QuestionNotFound(question_id) => {
                NOT_FOUND_CNTR.inc();
                (
                    StatusCode::NOT_FOUND,
                    format!("Pytanie o ID {question_id} nie zostało znalezione."),
                )
            }
            ApiError::DataBaseError(error) => {
                tracing::error!("Database error: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL.to_owned())
            }
            ApiError::StoreUnavailable(error) => {
                tracing::warn!("Store unavailable: {error}");
                (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_DETAIL.to_owned())
            }
            ApiError::Internal(error) => {
                tracing::error!("Internal error: {error:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL.to_owned())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::DataBaseError(error)
    }
}

impl From<prometheus::Error> for ApiError {
    fn from(error: prometheus::Error) -> ApiError {
        ApiError::Internal(error.into())
    }
}
