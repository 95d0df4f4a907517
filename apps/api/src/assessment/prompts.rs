// All LLM prompt constants for the Assessment module.

/// Recommendation prompt template.
/// Replace: {interests}, {skills}, {academic_strengths}, {career_goals},
///          {work_environment}
/// Profile fields are embedded verbatim — the structured response format is
/// enforced by the schema, not by prompt text.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Act as a world-class career counselor. Analyze the following student profile and suggest 3 highly relevant career paths.
User Profile:
- Interests: {interests}
- Skills: {skills}
- Academic Strengths: {academic_strengths}
- Career Goals: {career_goals}
- Preferred Work Environment: {work_environment}

Ensure the recommendations are practical, specific, and account for current job market trends."#;
