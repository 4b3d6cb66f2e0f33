use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fxform_core::errors::{Error as CoreError, ValidationError};
use fxform_core::fx::FxError;
use fxform_core::session::FormErrors;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FormErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, fields) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(ValidationError::Form(errors)) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, Some(errors.clone()))
                }
                CoreError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, None),
                CoreError::Fx(FxError::RatesUnavailable) => (StatusCode::SERVICE_UNAVAILABLE, None),
                CoreError::Fx(FxError::CacheError(_)) => (StatusCode::INTERNAL_SERVER_ERROR, None),
                CoreError::Fx(_) => (StatusCode::BAD_REQUEST, None),
                CoreError::Rates(_) => (StatusCode::BAD_GATEWAY, None),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
            fields,
        });
        (status, body).into_response()
    }
}

impl<T> From<std::sync::PoisonError<T>> for ApiError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ApiError::Internal(format!("Session lock poisoned: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
