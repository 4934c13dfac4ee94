//! Mapping of handler failures to HTTP responses.
//!
//! - `StoreError::NotFound` → 404, plain text `Customer not found`
//! - JSON decode failures   → 400 with the decoder's message
//!
//! Bodies over the configured limit never reach a handler; the body
//! extractor answers 413 on its own.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

/// Body sent with every 404 for a missing customer.
pub const NOT_FOUND_BODY: &str = "Customer not found";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] StoreError),

    #[error("Failed to parse the request body as JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match self {
            ApiError::NotFound(StoreError::NotFound { id }) => {
                tracing::debug!(id = %id, "Customer not found");
                (status, NOT_FOUND_BODY).into_response()
            }
            ApiError::InvalidBody(err) => {
                tracing::warn!(status = %status, error = %err, "Rejected request body");
                (status, message).into_response()
            }
        }
    }
}
