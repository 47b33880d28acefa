//! Booking model and wire DTOs

use serde::{Deserialize, Serialize};

/// Persisted booking row
///
/// `start_utc`/`end_utc`/`created_at` are UTC unix milliseconds; only the
/// storage boundary and the slot engine deal in these, the wire format
/// renders them as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub start_utc: i64,
    pub end_utc: i64,
    pub booker_name: String,
    pub created_at: i64,
}

/// Create booking payload (`POST /api/bookings` body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub room_id: i64,
    /// Calendar date in the facility timezone, `YYYY-MM-DD`
    pub date: String,
    /// Hour-of-day of the slot's start, within the opening-hours window
    pub hour: i64,
    pub booker_name: String,
}

/// Booking creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub id: i64,
    pub room_id: i64,
    /// Slot start as an RFC 3339 UTC timestamp
    pub start_utc: String,
    /// Slot end as an RFC 3339 UTC timestamp
    pub end_utc: String,
    pub booker_name: String,
}

impl From<Booking> for BookingConfirmation {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            room_id: booking.room_id,
            start_utc: rfc3339_utc(booking.start_utc),
            end_utc: rfc3339_utc(booking.end_utc),
            booker_name: booking.booker_name,
        }
    }
}

/// UTC millis → RFC 3339 string ("2024-07-01T06:00:00.000Z")
fn rfc3339_utc(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        .unwrap_or_default()
}
