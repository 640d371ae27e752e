use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::GameDetail;
use crate::state::AppState;

/// Handler for the game-detail endpoint
pub async fn detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<GameDetail>> {
    let detail = state.engine.lookup(&name)?;
    Ok(Json(detail))
}
