//! Room model

use serde::{Deserialize, Serialize};

/// Meeting room entity
///
/// Rooms are seeded once at database setup and are read-only to the
/// service: the booking flow references them, it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
}
