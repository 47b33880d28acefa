//! Room listing

use axum::Json;
use axum::extract::State;
use shared::models::Room;

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

/// GET /api/rooms — all rooms ordered by name
pub async fn list_rooms(State(state): State<AppState>) -> ServiceResult<Json<Vec<Room>>> {
    let rooms = db::rooms::list(&state.pool, &[]).await?;
    Ok(Json(rooms))
}
