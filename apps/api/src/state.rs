use std::sync::Arc;

use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. The completion client sits behind its dispatch trait so tests
/// construct the state with a scripted backend instead of a live client.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionBackend>,
}
