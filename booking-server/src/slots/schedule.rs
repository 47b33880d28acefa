//! Facility schedule — slot/time conversion
//!
//! All slot arithmetic is done in the facility's local timezone and only
//! converted to UTC millis at the storage boundary. A daylight-saving
//! transition therefore shifts the UTC offset of a conversion, never the
//! local slot grid: hour 9 is always the second slot of the day.

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::error::AppError;

/// Facility timezone
pub const TIMEZONE: Tz = chrono_tz::Europe::Stockholm;
/// First bookable hour
pub const HOUR_START: u32 = 8;
/// End of the daily window, exclusive (the last slot is 16:00-17:00)
pub const HOUR_END: u32 = 17;
/// Slot length in minutes
pub const SLOT_MINUTES: i64 = 60;
/// Expected date string format
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Fixed daily slot grid for one facility
///
/// Owned by `AppState` and passed into the engine and the booking writer;
/// alternate schedules are constructible for tests.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub tz: Tz,
    pub hour_start: u32,
    /// Exclusive
    pub hour_end: u32,
    pub slot_minutes: i64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            tz: TIMEZONE,
            hour_start: HOUR_START,
            hour_end: HOUR_END,
            slot_minutes: SLOT_MINUTES,
        }
    }
}

impl Schedule {
    /// Parse a date string (YYYY-MM-DD)
    pub fn parse_date(&self, date: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(date, DATE_FMT).map_err(|_| AppError::invalid_date(date))
    }

    /// Render a date back to its wire form (YYYY-MM-DD)
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(DATE_FMT).to_string()
    }

    /// Local (date, hour) slot → UTC millis interval `[start, start + slot)`
    pub fn slot_bounds(&self, date: NaiveDate, hour: u32) -> (i64, i64) {
        let start = self.local_hour_millis(date, hour);
        (start, start + self.slot_minutes * 60_000)
    }

    /// All calendar days in `[from, to]`, ascending; empty when `to < from`
    pub fn days(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut day = from;
        while day <= to {
            out.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        out
    }

    /// The daily slot grid `[hour_start, hour_end)`
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.hour_start..self.hour_end
    }

    /// UTC millis bounds covering every slot in `[from, to]`: start of
    /// `from`'s local day to start of the day after `to`, half-open.
    ///
    /// Callers use `>= start, < end` semantics on the returned pair.
    pub fn range_bounds(&self, from: NaiveDate, to: NaiveDate) -> (i64, i64) {
        let next_day = to.succ_opt().unwrap_or(to);
        (
            self.local_hour_millis(from, 0),
            self.local_hour_millis(next_day, 0),
        )
    }

    /// Local date + hour → UTC unix millis (facility timezone)
    ///
    /// DST gap fallback: if the local time does not exist (spring-forward
    /// jump), take the latest valid mapping, falling back to UTC.
    fn local_hour_millis(&self, date: NaiveDate, hour: u32) -> i64 {
        let naive = date.and_hms_opt(hour, 0, 0).unwrap();
        naive
            .and_local_timezone(self.tz)
            .latest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis())
    }
}
