// Cross-cutting prompt fragments. Each flow that calls the LLM defines its
// own prompts.rs alongside its handlers; this file holds what they share.

/// System prompt fragment that enforces JSON-only output for the flows
/// whose replies are parsed into typed results.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with a single valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
