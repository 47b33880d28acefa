//! Slot calendar engine
//!
//! Bidirectional mapping between facility-local (date, hour) slots and
//! absolute UTC instants, and the free-slot computation over a date range.

mod engine;
mod schedule;

pub use engine::list_free_slots;
pub use schedule::{DATE_FMT, HOUR_END, HOUR_START, SLOT_MINUTES, Schedule, TIMEZONE};
