use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::WlogError;
use tracing::debug;

use crate::observability::REJECTED_TOTAL;

/// Boundary wrapper turning domain errors into bare status codes.
/// Clients get no body; the detail stays in the server log.
#[derive(Debug)]
pub struct ApiError(pub WlogError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WlogError::UserNotFound(_) => StatusCode::BAD_REQUEST,
            WlogError::TopicNotFound { .. } => StatusCode::NOT_FOUND,
            WlogError::TopicExists { .. } => StatusCode::BAD_REQUEST,
            WlogError::BadBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<WlogError> for ApiError {
    fn from(e: WlogError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.0.kind();
        REJECTED_TOTAL.with_label_values(&[kind]).inc();
        debug!(event = "request_rejected", kind, status = status.as_u16(), error = %self.0, "request rejected");
        status.into_response()
    }
}
