//! HTTP error responses for the web adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::error::SigtraderError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<SigtraderError> for WebError {
    fn from(err: SigtraderError) -> Self {
        Self::new(status_from_error(&err), err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: &self.message,
        });
        (self.status, body).into_response()
    }
}

pub fn status_from_error(err: &SigtraderError) -> StatusCode {
    match err {
        SigtraderError::ConfigMissing { .. }
        | SigtraderError::ConfigInvalid { .. }
        | SigtraderError::ConfigParse { .. }
        | SigtraderError::MalformedSnapshot { .. }
        | SigtraderError::SnapshotParse { .. } => StatusCode::BAD_REQUEST,
        SigtraderError::InsufficientData { .. } | SigtraderError::DegenerateRisk { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SigtraderError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
