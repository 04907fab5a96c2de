//! # Error Handling Middleware
//!
//! Maps domain `BookingError`s to HTTP status codes and JSON error
//! responses, so every endpoint reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use marquee_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps a `BookingError` and implements `IntoResponse`,
/// letting handlers bubble domain errors with `?`.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::InvalidRequest(_) | BookingError::DayInvalid(_) => {
                StatusCode::BAD_REQUEST
            }
            // Recoverable: the caller re-queries availability and retries
            BookingError::Conflict(_) | BookingError::SeatsNoLongerAvailable(_) => {
                StatusCode::CONFLICT
            }
            BookingError::NotFound(_) | BookingError::ScheduleNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            BookingError::InvalidSeatSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Storage(err))
    }
}

/// Maps a BookingError straight to an HTTP response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
