//! Booking creation

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use shared::models::{BookingConfirmation, BookingCreate};

use crate::bookings;
use crate::error::ServiceResult;
use crate::state::AppState;

/// POST /api/bookings — 201 with the persisted booking on success
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingCreate>,
) -> ServiceResult<(StatusCode, Json<BookingConfirmation>)> {
    let now = chrono::Utc::now().timestamp_millis();
    let booking = bookings::create_booking(&state.pool, &state.schedule, &request, now).await?;
    Ok((StatusCode::CREATED, Json(BookingConfirmation::from(booking))))
}
