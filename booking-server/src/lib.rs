//! booking-server — meeting-room booking service
//!
//! Long-running service that:
//! - Lists rooms and free (room, date, hour) slots over a date range
//! - Records bookings, with double-booking rejected atomically by the
//!   storage layer's UNIQUE(room_id, start_utc) constraint

pub mod api;
pub mod bookings;
pub mod config;
pub mod db;
pub mod error;
pub mod slots;
pub mod state;
