use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::sidebar::types::sidebar_error::SidebarError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<SidebarError> for AppError {
    fn from(e: SidebarError) -> Self {
        let code = match e {
            SidebarError::Validation(_) => StatusCode::BAD_REQUEST,
            SidebarError::Lookup { .. } | SidebarError::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        AppError::new(code, &e.to_string())
    }
}

/// Body of every error response, the message is meant to be shown as is.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}
