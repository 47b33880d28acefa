//! Booking writer
//!
//! Validates one booking request, computes the slot's UTC interval and
//! inserts it as a new row. There is deliberately no free-slot re-check
//! before the insert: the UNIQUE(room_id, start_utc) index makes
//! check-and-insert atomic, so concurrent attempts on the same slot cannot
//! both win and no in-process lock is needed.

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{Booking, BookingCreate};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ServiceResult;
use crate::slots::Schedule;

/// Create one booking; `now` is the creation timestamp in UTC millis.
///
/// Validation runs before any storage access. Storage-level outcomes map
/// to the error taxonomy: unique violation → `SlotAlreadyBooked`, foreign
/// key violation → `RoomNotFound`, anything else propagates as a database
/// error.
pub async fn create_booking(
    pool: &SqlitePool,
    schedule: &Schedule,
    request: &BookingCreate,
    now: i64,
) -> ServiceResult<Booking> {
    let (date, booker_name) = validate(schedule, request)?;
    let (start_utc, end_utc) = schedule.slot_bounds(date, request.hour as u32);

    let insert = db::bookings::insert(
        pool,
        request.room_id,
        start_utc,
        end_utc,
        &booker_name,
        now,
    )
    .await;

    let id = match insert {
        Ok(id) => id,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::new(ErrorCode::SlotAlreadyBooked).into());
        }
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            return Err(AppError::with_message(
                ErrorCode::RoomNotFound,
                format!("Invalid roomId: {}", request.room_id),
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Booking {
        id,
        room_id: request.room_id,
        start_utc,
        end_utc,
        booker_name,
        created_at: now,
    })
}

/// Field-level validation; every failing field is reported in the error
/// details. Returns the parsed date and the trimmed booker name (the
/// trimmed form is what gets stored).
fn validate(schedule: &Schedule, request: &BookingCreate) -> Result<(NaiveDate, String), AppError> {
    let mut failures: Vec<(&str, String)> = Vec::new();

    if request.room_id <= 0 {
        failures.push(("roomId", "roomId must be a positive integer".to_string()));
    }

    let date = match schedule.parse_date(&request.date) {
        Ok(d) => Some(d),
        Err(_) => {
            failures.push((
                "date",
                format!("Invalid date (expected YYYY-MM-DD): {}", request.date),
            ));
            None
        }
    };

    if request.hour < i64::from(schedule.hour_start) || request.hour >= i64::from(schedule.hour_end)
    {
        failures.push((
            "hour",
            format!(
                "hour must be in [{}, {})",
                schedule.hour_start, schedule.hour_end
            ),
        ));
    }

    let booker_name = request.booker_name.trim();
    if booker_name.chars().count() < 2 {
        failures.push((
            "bookerName",
            "bookerName must be at least 2 characters".to_string(),
        ));
    }

    if failures.is_empty()
        && let Some(date) = date
    {
        return Ok((date, booker_name.to_string()));
    }

    let mut err = AppError::new(ErrorCode::ValidationFailed);
    for (field, message) in failures {
        err = err.with_detail(field, message);
    }
    Err(err)
}
