//! Free slot DTO

use serde::{Deserialize, Serialize};

use super::Room;

/// One free bookable hour for one room
///
/// Derived, never persisted: a slot is free exactly when no booking row
/// exists with the matching (room, start instant) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// Calendar date in the facility timezone, `YYYY-MM-DD`
    pub date: String,
    /// Hour-of-day of the slot's start
    pub hour: u32,
    pub room: Room,
}
