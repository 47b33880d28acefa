//! Unified error system for the booking service
//!
//! - [`ErrorCode`]: standardized error codes for all failure kinds
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`ApiResponse`]: unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Room errors
//! - 2xxx: Booking errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::SlotAlreadyBooked);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::InvalidDate, "Invalid date: 2024-13-01");
//!
//! // Create an error with field-level details
//! let err = AppError::validation("Validation failed")
//!     .with_detail("bookerName", "must be at least 2 characters");
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
