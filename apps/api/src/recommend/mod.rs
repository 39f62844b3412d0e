// Recommendation flow: free-text interest in, catalog-grounded best-match
// project out. The prompt carries the static catalog; the reply is parsed,
// schema-checked and resolved back against the catalog before rendering.

pub mod handlers;
pub mod matcher;
pub mod prompts;
