//! Domain models and wire DTOs

pub mod booking;
pub mod room;
pub mod slot;

pub use booking::{Booking, BookingConfirmation, BookingCreate};
pub use room::Room;
pub use slot::FreeSlot;
