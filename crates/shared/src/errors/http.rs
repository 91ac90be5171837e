use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, PartialEq, Eq)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    /// Maps a workflow failure onto the HTTP surface. Not-found kinds keep
    /// their message, everything unexpected collapses into `fallback` so no
    /// store detail reaches the client.
    pub fn from_service(err: ServiceError, fallback: &str) -> Self {
        error!("❌ {fallback}: {err}");

        if err.is_not_found() {
            return HttpError::NotFound(err.to_string());
        }

        HttpError::Internal(fallback.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => {
                msg
            }
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
