use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::analyze::analyzer::{analyze_resume, match_description, AnalysisResult};
use crate::analyze::extract::extract_text;
use crate::analyze::upload::{admit, MAX_UPLOAD_BYTES};
use crate::errors::AppError;
use crate::state::AppState;

/// Request body cap for the analyze route. Roomy enough that the admission
/// gate, not the transport layer, reports oversize uploads.
pub const ANALYZE_BODY_LIMIT_BYTES: usize = 2 * MAX_UPLOAD_BYTES;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub match_description: &'static str,
}

/// POST /api/analyze-resume
///
/// Multipart upload with one `resume` field. Gate order: admission
/// (media type, size) → text extraction → completion call.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut document: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Malformed multipart request".to_string()))?
    {
        if field.name() == Some("resume") {
            let media_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|_| AppError::Validation("Could not read uploaded file".to_string()))?;
            document = Some((media_type, data));
            break;
        }
    }

    let (media_type, data) = document
        .ok_or_else(|| AppError::Validation("Missing 'resume' upload field".to_string()))?;

    let kind = admit(&media_type, data.len()).map_err(|e| AppError::Validation(e.to_string()))?;
    let text = extract_text(kind, &data)?;

    let analysis = analyze_resume(state.llm.as_ref(), &text).await?;
    let match_description = match_description(analysis.match_score);

    Ok(Json(AnalyzeResponse {
        analysis,
        match_description,
    }))
}
