use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommend::matcher::{recommend_project, RecommendationResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub interest: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendation: RecommendationResult,
}

/// POST /api/recommend-project
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let recommendation = recommend_project(state.llm.as_ref(), &req.interest).await?;
    Ok(Json(RecommendResponse { recommendation }))
}
