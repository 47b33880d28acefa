//! Free-slot computation
//!
//! Enumerates the day × room × hour grid for a date range and subtracts
//! the slots that already have a booking. The enumeration is
//! O(days × rooms × hours) regardless of how few bookings exist; at the
//! scale of a single facility that is the intended trade-off.

use std::collections::HashSet;

use chrono::NaiveDate;
use shared::models::{FreeSlot, Room};
use sqlx::SqlitePool;

use super::Schedule;
use crate::db;
use crate::error::ServiceResult;

/// Compute the free slots for `[from, to]`, optionally restricted to
/// `room_ids`.
///
/// Rooms are ordered by name; output follows day → room → hour iteration
/// order. An empty candidate room set short-circuits to an empty list
/// without touching the bookings table. An inverted range (`to < from`)
/// yields no days and therefore no slots.
pub async fn list_free_slots(
    pool: &SqlitePool,
    schedule: &Schedule,
    from: &str,
    to: &str,
    room_ids: &[i64],
) -> ServiceResult<Vec<FreeSlot>> {
    let from = schedule.parse_date(from)?;
    let to = schedule.parse_date(to)?;

    let rooms = db::rooms::list(pool, room_ids).await?;
    if rooms.is_empty() {
        return Ok(Vec::new());
    }

    let (range_start, range_end) = schedule.range_bounds(from, to);
    let booked = db::bookings::booked_keys(pool, range_start, range_end, room_ids).await?;

    Ok(subtract_booked(schedule, from, to, &rooms, &booked))
}

/// Pure grid subtraction: every (day, room, hour) triple whose start
/// instant is not in `booked` is free.
fn subtract_booked(
    schedule: &Schedule,
    from: NaiveDate,
    to: NaiveDate,
    rooms: &[Room],
    booked: &HashSet<(i64, i64)>,
) -> Vec<FreeSlot> {
    let mut free = Vec::new();
    for day in schedule.days(from, to) {
        for room in rooms {
            for hour in schedule.hours() {
                let (start, _) = schedule.slot_bounds(day, hour);
                if !booked.contains(&(room.id, start)) {
                    free.push(FreeSlot {
                        date: schedule.format_date(day),
                        hour,
                        room: room.clone(),
                    });
                }
            }
        }
    }
    free
}
