// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::provider::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required")]
    MissingMessage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Failed to process request: {0}")]
    Upstream(#[from] ProviderError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingMessage | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::MissingMessage => ErrorBody {
                error: "Message is required".to_string(),
                details: None,
            },
            AppError::InvalidBody(details) => ErrorBody {
                error: "Invalid request body".to_string(),
                details: Some(details),
            },
            AppError::MissingApiKey => ErrorBody {
                error: "API key not configured".to_string(),
                details: None,
            },
            AppError::Upstream(err) => ErrorBody {
                error: "Failed to process request".to_string(),
                details: Some(err.to_string()),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::MissingMessage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidBody("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingApiKey.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(ProviderError::InvalidResponse("Gemini")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
