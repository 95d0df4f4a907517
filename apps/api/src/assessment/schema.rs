//! Structured-output schema declared to the model.
//!
//! Mirrors `CareerRecommendation` exactly: an array of 8-field objects,
//! every field required, `difficulty` constrained to three values. The
//! response validator re-checks the same contract on the way back in —
//! the schema constrains the model, the validator enforces the type.

use std::sync::LazyLock;

use serde_json::{json, Value};

/// The fixed response schema sent with every recommendation request.
pub static RECOMMENDATION_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Job title" },
                "description": { "type": "STRING", "description": "Brief overview of the role" },
                "whyFits": {
                    "type": "STRING",
                    "description": "Explanation of why this fits the user specifically"
                },
                "requiredSkills": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Key technical and soft skills needed"
                },
                "learningPath": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "stage": {
                                "type": "STRING",
                                "description": "E.g., University, Certifications, Entry-level"
                            },
                            "description": {
                                "type": "STRING",
                                "description": "What to do in this stage"
                            }
                        },
                        "required": ["stage", "description"]
                    }
                },
                "salaryRange": { "type": "STRING", "description": "Expected annual salary range" },
                "jobOutlook": { "type": "STRING", "description": "Market demand and growth potential" },
                "difficulty": {
                    "type": "STRING",
                    "enum": ["Beginner", "Intermediate", "Advanced"]
                }
            },
            "required": [
                "title",
                "description",
                "whyFits",
                "requiredSkills",
                "learningPath",
                "salaryRange",
                "jobOutlook",
                "difficulty"
            ]
        }
    })
});
