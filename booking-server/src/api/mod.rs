//! API routes
//!
//! Thin HTTP boundary: each handler parses the request, delegates to the
//! slot engine or the booking writer, and serializes the outcome.

pub mod bookings;
pub mod free_slots;
pub mod health;
pub mod rooms;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with middleware and state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/rooms", get(rooms::list_rooms))
        .route("/api/free-slots", get(free_slots::get_free_slots))
        .route("/api/bookings", post(bookings::create_booking))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
