#![allow(dead_code)]

//! Career recommendation records — the typed output of the pipeline.

use serde::{Deserialize, Serialize};

/// How hard the path is to enter. The model must pick one of exactly these
/// three values; anything else is rejected by the response validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Beginner" => Some(Difficulty::Beginner),
            "Intermediate" => Some(Difficulty::Intermediate),
            "Advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// One step of the career roadmap. Sequence order is chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStage {
    pub stage: String,
    pub description: String,
}

/// One suggested career with supporting detail. Produced only by the
/// response validator — every field is required; there is no such thing as
/// a partially-filled recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    /// Ties the suggestion back to the submitted profile.
    pub why_fits: String,
    pub required_skills: Vec<String>,
    pub learning_path: Vec<LearningStage>,
    /// Free-text range, not a parsed numeric type.
    pub salary_range: String,
    pub job_outlook: String,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recommendation() -> CareerRecommendation {
        CareerRecommendation {
            title: "Backend Engineer".to_string(),
            description: "Designs and operates server-side systems.".to_string(),
            why_fits: "Matches your Python skills and interest in coding.".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            learning_path: vec![LearningStage {
                stage: "University".to_string(),
                description: "CS degree with a systems focus.".to_string(),
            }],
            salary_range: "$90,000 - $140,000".to_string(),
            job_outlook: "Strong demand through the decade.".to_string(),
            difficulty: Difficulty::Intermediate,
        }
    }

    #[test]
    fn test_recommendation_round_trips_through_json() {
        let rec = sample_recommendation();
        let json = serde_json::to_string(&rec).unwrap();
        let recovered: CareerRecommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, rec);
    }

    #[test]
    fn test_wire_form_uses_camel_case_field_names() {
        let value = serde_json::to_value(sample_recommendation()).unwrap();
        assert!(value.get("whyFits").is_some());
        assert!(value.get("requiredSkills").is_some());
        assert!(value.get("learningPath").is_some());
        assert!(value.get("salaryRange").is_some());
        assert!(value.get("jobOutlook").is_some());
    }

    #[test]
    fn test_recommendation_without_salary_range_fails_deserialization() {
        let mut value = serde_json::to_value(sample_recommendation()).unwrap();
        value.as_object_mut().unwrap().remove("salaryRange");
        let result: Result<CareerRecommendation, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_difficulty_parse_accepts_exactly_three_values() {
        assert_eq!(Difficulty::parse("Beginner"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("Intermediate"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::parse("Advanced"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("Expert"), None);
        assert_eq!(Difficulty::parse("beginner"), None);
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn test_difficulty_serde_matches_as_str() {
        for difficulty in [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced] {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{}\"", difficulty.as_str()));
        }
    }
}
