use crate::{
    domain::response::{ErrorResponse, ValidationErrorResponse},
    errors::{RepositoryError, ServiceError},
    validation::FieldError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado.";

/// Wire-level failures. Validation failures respond with an `errors` array,
/// everything else with a single `error` message; callers distinguish the two
/// by which key is present.
#[derive(Debug)]
pub enum HttpError {
    Validation(Vec<FieldError>),
    NotFound,
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(RepositoryError::NotFound) => HttpError::NotFound,
            ServiceError::Repo(repo_err) => HttpError::Internal(repo_err.to_string()),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            HttpError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            HttpError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: msg }))
                    .into_response()
            }
        }
    }
}
