//! User profile — the five-field self-description submitted by the student.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Where the student prefers to work. Drives no logic — it is embedded
/// verbatim in the prompt like the free-text fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkEnvironment {
    #[default]
    Office,
    Remote,
    Field,
    Flexible,
}

impl WorkEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkEnvironment::Office => "office",
            WorkEnvironment::Remote => "remote",
            WorkEnvironment::Field => "field",
            WorkEnvironment::Flexible => "flexible",
        }
    }
}

/// A submitted student profile. Immutable once handed to the pipeline —
/// everything downstream borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub interests: String,
    pub skills: String,
    pub academic_strengths: String,
    pub career_goals: String,
    #[serde(default)]
    pub preferred_work_environment: WorkEnvironment,
}

impl UserProfile {
    /// Presence validation: every text field must be non-empty after trim.
    /// Rejected profiles never reach the pipeline.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("interests", &self.interests),
            ("skills", &self.skills),
            ("academicStrengths", &self.academic_strengths),
            ("careerGoals", &self.career_goals),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Input(format!("{name} is required")));
            }
        }

        Ok(())
    }
}
