use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::prompts::CHAT_SYSTEM;
use crate::errors::AppError;
use crate::models::message::{Message, Role};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat
///
/// Takes the widget's full transcript and returns the assistant reply for
/// the latest user turn.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let last = req
        .messages
        .last()
        .ok_or_else(|| AppError::Validation("Transcript must not be empty".to_string()))?;

    if last.role != Role::User || last.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Transcript must end with a non-empty user message".to_string(),
        ));
    }

    let reply = state
        .llm
        .complete(CHAT_SYSTEM, &req.messages)
        .await
        .map_err(|e| AppError::from_llm(e, "Failed to get response"))?;

    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::ScriptedBackend;
    use crate::llm_client::LlmError;

    fn state_with(backend: Arc<ScriptedBackend>) -> AppState {
        AppState { llm: backend }
    }

    #[tokio::test]
    async fn replies_to_a_user_turn() {
        let backend = Arc::new(ScriptedBackend::replying("He built ServiceBridge."));
        let state = state_with(backend.clone());

        let req = ChatRequest {
            messages: vec![Message::user("What projects have you built?")],
        };
        let Json(resp) = handle_chat(State(state), Json(req)).await.unwrap();

        assert_eq!(resp.reply, "He built ServiceBridge.");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn empty_transcript_is_rejected_before_dispatch() {
        let backend = Arc::new(ScriptedBackend::replying("unused"));
        let state = state_with(backend.clone());

        let req = ChatRequest { messages: vec![] };
        let err = handle_chat(State(state), Json(req)).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn transcript_ending_with_assistant_is_rejected() {
        let backend = Arc::new(ScriptedBackend::replying("unused"));
        let state = state_with(backend.clone());

        let req = ChatRequest {
            messages: vec![Message::user("hi"), Message::assistant("hello")],
        };
        let err = handle_chat(State(state), Json(req)).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn rate_limit_surfaces_as_upstream_429() {
        let backend = Arc::new(ScriptedBackend::failing(LlmError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        }));
        let state = state_with(backend.clone());

        let req = ChatRequest {
            messages: vec![Message::user("hi")],
        };
        let err = handle_chat(State(state), Json(req)).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { status: 429 }));
    }
}
