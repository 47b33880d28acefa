//! Free-slot listing

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::FreeSlot;

use crate::error::ServiceResult;
use crate::slots;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlotsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Comma-separated room ids; tokens that do not parse are ignored
    pub room_ids: Option<String>,
}

impl FreeSlotsQuery {
    fn room_ids(&self) -> Vec<i64> {
        self.room_ids
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter_map(|token| token.trim().parse::<i64>().ok())
            .collect()
    }
}

/// GET /api/free-slots?from=YYYY-MM-DD&to=YYYY-MM-DD&roomIds=1,2
pub async fn get_free_slots(
    State(state): State<AppState>,
    Query(query): Query<FreeSlotsQuery>,
) -> ServiceResult<Json<Vec<FreeSlot>>> {
    let (from, to) = require_range(&query)?;
    let free =
        slots::list_free_slots(&state.pool, &state.schedule, from, to, &query.room_ids()).await?;
    Ok(Json(free))
}

fn require_range(query: &FreeSlotsQuery) -> Result<(&str, &str), AppError> {
    match (query.from.as_deref(), query.to.as_deref()) {
        (Some(from), Some(to)) => Ok((from, to)),
        (from, to) => {
            let mut err = AppError::new(ErrorCode::ValidationFailed);
            if from.is_none() {
                err = err.with_detail("from", "from is required");
            }
            if to.is_none() {
                err = err.with_detail("to", "to is required");
            }
            Err(err)
        }
    }
}
