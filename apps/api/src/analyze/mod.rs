// Resume analysis flow: admission gate → text extraction → analyst prompt →
// schema-checked scoring result. The gate runs before anything touches the
// network; resumes are processed in memory and never stored.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod upload;
