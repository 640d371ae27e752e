use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::Recommendation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Free-text titles, exactly three expected
    pub games: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: BTreeMap<&'static str, Vec<Recommendation>>,
}

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    let recommendations = state.engine.recommend(&request.games)?;
    Ok(Json(RecommendResponse { recommendations }))
}
