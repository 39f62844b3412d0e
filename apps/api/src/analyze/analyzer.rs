//! Parses and validates the analyst's JSON reply. Same contract discipline
//! as the recommender: required fields, integer score in [0, 100], string
//! arrays (empty allowed). Anything else is a schema violation surfaced as
//! a generic failure.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analyze::prompts::{analysis_prompt, analyzer_system};
use crate::errors::AppError;
use crate::llm_client::{parse_json_reply, CompletionBackend};
use crate::models::message::Message;

const SCHEMA_MESSAGE: &str = "Failed to analyze resume";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    match_score: i64,
    strengths: Vec<String>,
    gaps: Vec<String>,
    collaboration_opportunities: Vec<String>,
    reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub match_score: u8,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub collaboration_opportunities: Vec<String>,
    pub reasoning: String,
}

/// Human-readable band for a match score, shown under the score dial.
pub fn match_description(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent match! Strong potential for collaboration"
    } else if score >= 60 {
        "Good match with complementary skills"
    } else if score >= 40 {
        "Moderate match with learning opportunities"
    } else {
        "Different focus areas, but potential for knowledge exchange"
    }
}

/// Runs the analysis flow for already-extracted resume text.
pub async fn analyze_resume(
    backend: &dyn CompletionBackend,
    resume_text: &str,
) -> Result<AnalysisResult, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text must not be empty".to_string(),
        ));
    }

    let system = analyzer_system();
    let prompt = analysis_prompt(resume_text);
    let reply = backend
        .complete(&system, &[Message::user(prompt)])
        .await
        .map_err(|e| AppError::from_llm(e, SCHEMA_MESSAGE))?;

    let raw: RawAnalysis =
        parse_json_reply(&reply).map_err(|e| AppError::from_llm(e, SCHEMA_MESSAGE))?;

    if !(0..=100).contains(&raw.match_score) {
        warn!("Analysis matchScore {} outside [0, 100]", raw.match_score);
        return Err(AppError::Schema(SCHEMA_MESSAGE.to_string()));
    }

    Ok(AnalysisResult {
        match_score: raw.match_score as u8,
        strengths: raw.strengths,
        gaps: raw.gaps,
        collaboration_opportunities: raw.collaboration_opportunities,
        reasoning: raw.reasoning,
    })
}
