use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

const ANALYZER_SYSTEM_TEMPLATE: &str = "You are a technical recruiter analyzing a resume \
against Olabode Olusegun's skill profile.

Olabode's core competencies:
- Frontend: React, Next.js, TypeScript, Tailwind CSS
- Backend: Node.js, Express, PostgreSQL, Redis
- System Design: Real-time systems, microservices, caching strategies
- AI/ML: LLM API integration, TensorFlow.js basics
- DevOps: Vercel, performance optimization, monitoring

Analyze the provided resume and respond with JSON of this exact shape:
{
  \"matchScore\": 0-100 integer (overall technical alignment),
  \"strengths\": [\"skill1\", \"skill2\"] (overlapping skills),
  \"gaps\": [\"missing_skill1\"] (skills in the resume but not Olabode's focus),
  \"collaborationOpportunities\": [\"area1\", \"area2\"] (where they could work together),
  \"reasoning\": \"Brief explanation of the match score\"
}

Be objective and constructive. Focus on collaboration potential, not comparison.

{json_only}";

const ANALYSIS_PROMPT_TEMPLATE: &str = "Resume text:\n\n{resume_text}";

pub fn analyzer_system() -> String {
    ANALYZER_SYSTEM_TEMPLATE.replace("{json_only}", JSON_ONLY_SYSTEM)
}

pub fn analysis_prompt(resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
