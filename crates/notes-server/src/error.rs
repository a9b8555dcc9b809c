//! API error types with JSON responses.
//!
//! Every failing handler ends here. Store errors are classified by variant:
//! a malformed id becomes 404, a failed validation becomes 400, and
//! anything unclassified becomes a generic 500 whose detail stays in the log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use notes_store::StoreError;

/// Body of the 404 returned for a malformed note id.
pub const MALFORMATTED_ID: &str = "malformatted id";

/// Body of the 413 returned when a request body exceeds the size limit.
pub const PAYLOAD_TOO_LARGE: &str = "request entity too large";

/// Body of the 500 returned for unclassified errors.
pub const INTERNAL_ERROR: &str = "internal server error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be read or parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request body exceeds the size limit (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Short name of the error kind, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BadRequest",
            Self::PayloadTooLarge(_) => "PayloadTooLarge",
            Self::Store(e) => e.name(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Store(e) => match e {
                StoreError::MalformedId(_) => StatusCode::NOT_FOUND,
                StoreError::Validation(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message sent to the client.
    fn client_message(&self) -> String {
        match self {
            Self::BadRequest(message) => message.clone(),
            Self::PayloadTooLarge(_) => PAYLOAD_TOO_LARGE.to_string(),
            Self::Store(StoreError::MalformedId(_)) => MALFORMATTED_ID.to_string(),
            Self::Store(StoreError::Validation(message)) => message.clone(),
            _ => INTERNAL_ERROR.to_string(),
        }
    }
}

/// JSON error response body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error.name = self.name(), error.message = %self, "request failed");
        } else {
            tracing::warn!(error.name = self.name(), error.message = %self, "request failed");
        }

        (status, Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
