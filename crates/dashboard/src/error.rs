//! API Error Types

use crate::controls::ControlError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by dashboard handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidControl(#[from] ControlError),

    /// No season given and the dataset has none to default to
    #[error("Dataset contains no seasons")]
    NoSeasons,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidControl(_) => StatusCode::BAD_REQUEST,
            ApiError::NoSeasons => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
