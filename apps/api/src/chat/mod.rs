// Chat flow: in-memory transcript, portfolio-assistant persona, one
// completion call per user turn. All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod transcript;
