//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Validation failures (including referential ones like an unknown room)
    /// map to 422, matching the public API contract; a slot conflict maps to
    /// 409 so callers can distinguish "already booked" from bad input.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::SlotAlreadyBooked => StatusCode::CONFLICT,

            // 422 Unprocessable Entity (validation + referential violations)
            Self::ValidationFailed
            | Self::InvalidDate
            | Self::ValueOutOfRange
            | Self::RoomNotFound => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
