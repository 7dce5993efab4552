use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{CreateEntryRequest, DayEntriesResponse, DeleteEntryResponse, DeleteQuery, ListQuery},
    repo_types::Entry,
    services,
};
use crate::{error::ApiError, state::AppState};

pub fn entry_routes() -> Router<AppState> {
    Router::new().route(
        "/entries",
        get(list_entries).post(create_entry).delete(delete_entry),
    )
}

/// GET /entries?date=YYYY-MM-DD
#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<DayEntriesResponse>, ApiError> {
    let day = services::list_entries(state.store.as_ref(), q.date.as_deref()).await?;
    Ok(Json(day))
}

/// POST /entries { name, calories?, category?, date }
#[instrument(skip(state, payload))]
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "rejected entry body");
        ApiError::validation("Invalid JSON body")
    })?;

    let entry = services::create_entry(state.store.as_ref(), body).await?;
    info!(id = %entry.id, date = %entry.date, calories = entry.calories, "entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /entries?id=...
#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Query(q): Query<DeleteQuery>,
) -> Result<Json<DeleteEntryResponse>, ApiError> {
    services::delete_entry(state.store.as_ref(), q.id.as_deref()).await?;
    info!(id = ?q.id, "entry deleted");
    Ok(Json(DeleteEntryResponse { success: true }))
}
