//! Parses and validates the recommender's JSON reply, then resolves it
//! against the static catalog. The model only ever picks an id, scores it
//! and argues the match; titles, categories and URLs come from the catalog
//! so a hallucinated field can never reach the widget.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{parse_json_reply, CompletionBackend};
use crate::models::message::Message;
use crate::models::project::project_by_id;
use crate::recommend::prompts::recommender_system;

const SCHEMA_MESSAGE: &str = "Failed to get recommendation";

/// The shape the prompt demands from the model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    project_id: String,
    reasoning: String,
    match_score: i64,
    #[serde(default)]
    tech_overlap: Vec<String>,
}

/// The enriched result rendered by the widget, camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub project_id: String,
    pub title: String,
    pub category: String,
    pub reasoning: String,
    pub match_score: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tech_overlap: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// Runs the full recommendation flow: validate input, dispatch, parse,
/// schema-check, resolve against the catalog.
pub async fn recommend_project(
    backend: &dyn CompletionBackend,
    interest: &str,
) -> Result<RecommendationResult, AppError> {
    let interest = interest.trim();
    if interest.is_empty() {
        return Err(AppError::Validation(
            "Interest must not be empty".to_string(),
        ));
    }

    let system = recommender_system();
    let reply = backend
        .complete(&system, &[Message::user(interest)])
        .await
        .map_err(|e| AppError::from_llm(e, SCHEMA_MESSAGE))?;

    let raw: RawRecommendation =
        parse_json_reply(&reply).map_err(|e| AppError::from_llm(e, SCHEMA_MESSAGE))?;

    resolve(raw)
}

/// Schema checks plus catalog resolution. Out-of-range scores are rejected,
/// not clamped — clamping would mask an upstream contract violation.
fn resolve(raw: RawRecommendation) -> Result<RecommendationResult, AppError> {
    if !(0..=100).contains(&raw.match_score) {
        warn!(
            "Recommendation matchScore {} outside [0, 100]",
            raw.match_score
        );
        return Err(AppError::Schema(SCHEMA_MESSAGE.to_string()));
    }

    let Some(project) = project_by_id(&raw.project_id) else {
        warn!("Recommendation named unknown project '{}'", raw.project_id);
        return Err(AppError::Schema(SCHEMA_MESSAGE.to_string()));
    };

    // Keep only overlap claims backed by the catalog entry's real stack.
    let tech_overlap: Vec<String> = raw
        .tech_overlap
        .into_iter()
        .filter(|claimed| {
            project
                .tech
                .iter()
                .any(|t| t.eq_ignore_ascii_case(claimed))
        })
        .collect();

    Ok(RecommendationResult {
        project_id: project.id.to_string(),
        title: project.title.to_string(),
        category: project.category.to_string(),
        reasoning: raw.reasoning,
        match_score: raw.match_score as u8,
        tech_overlap,
        live_url: project.live_url.map(str::to_string),
    })
}
