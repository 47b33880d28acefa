//! Shared types for the room-booking service
//!
//! Domain models, wire DTOs and the unified error system used by
//! the booking server.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
