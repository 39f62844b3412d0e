use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::project::PROJECTS;

const RECOMMENDER_SYSTEM_TEMPLATE: &str = "You are analyzing a user's technical interest to \
recommend the most relevant project from Olabode's portfolio.

Available projects:
{catalog}

Based on the user's interest, recommend ONE project and explain why it's the best match. Consider:
- Technical stack overlap
- Problem domain similarity
- Complexity level
- Practical applications

Respond with JSON of this exact shape:
{
  \"projectId\": \"servicebridge\",
  \"reasoning\": \"This project demonstrates...\",
  \"matchScore\": 92,
  \"techOverlap\": [\"React\", \"Redis\"]
}
projectId MUST be one of the catalog ids above. matchScore MUST be an integer from 0 to 100.

{json_only}";

/// Renders the full recommender system prompt with the catalog inlined.
pub fn recommender_system() -> String {
    RECOMMENDER_SYSTEM_TEMPLATE
        .replace("{catalog}", &render_catalog())
        .replace("{json_only}", JSON_ONLY_SYSTEM)
}

/// One numbered line per project: id, title, description, tech list.
fn render_catalog() -> String {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {} (id: {}): {} [tech: {}]",
                i + 1,
                p.title,
                p.id,
                p.description,
                p.tech.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_lists_every_catalog_id() {
        let system = recommender_system();
        for p in PROJECTS {
            assert!(system.contains(p.id), "missing catalog id {}", p.id);
        }
    }

    #[test]
    fn system_prompt_keeps_json_contract() {
        let system = recommender_system();
        assert!(system.contains("\"matchScore\""));
        assert!(system.contains(JSON_ONLY_SYSTEM));
        assert!(!system.contains("{catalog}"));
    }
}
