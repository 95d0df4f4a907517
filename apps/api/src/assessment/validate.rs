//! Response Validator — enforces the `CareerRecommendation` contract on
//! parsed model output.
//!
//! The model declares a structured-output schema, but the response is still
//! untrusted text: every field is re-checked here before anything reaches a
//! caller. A payload that fails any rule is rejected whole — there is no
//! partially-accepted record.

use serde_json::{Map, Value};

use crate::assessment::recommendation::{CareerRecommendation, Difficulty, LearningStage};
use crate::errors::AppError;

/// Validates a parsed payload against the recommendation contract and
/// returns the typed sequence in the model's order.
///
/// The prompt requests 3 recommendations, but length is not part of the
/// contract — shape is validated, count is not. Never mutates its input;
/// re-validating the serialized form of an accepted sequence yields an
/// equal sequence.
pub fn validate_recommendations(payload: &Value) -> Result<Vec<CareerRecommendation>, AppError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| validation_error("payload is not a JSON array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index, entry))
        .collect()
}

fn validate_entry(index: usize, entry: &Value) -> Result<CareerRecommendation, AppError> {
    let fields = entry
        .as_object()
        .ok_or_else(|| entry_error(index, "entry is not a JSON object"))?;

    let title = require_string(index, fields, "title")?;
    let description = require_string(index, fields, "description")?;
    let why_fits = require_string(index, fields, "whyFits")?;
    let salary_range = require_string(index, fields, "salaryRange")?;
    let job_outlook = require_string(index, fields, "jobOutlook")?;

    let difficulty_raw = require_string(index, fields, "difficulty")?;
    let difficulty = Difficulty::parse(&difficulty_raw).ok_or_else(|| {
        entry_error(
            index,
            &format!("difficulty `{difficulty_raw}` is not one of Beginner, Intermediate, Advanced"),
        )
    })?;

    let required_skills = require_array(index, fields, "requiredSkills")?
        .iter()
        .map(|skill| {
            skill
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| entry_error(index, "requiredSkills contains a non-string element"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let learning_path = require_array(index, fields, "learningPath")?
        .iter()
        .map(|stage| validate_stage(index, stage))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CareerRecommendation {
        title,
        description,
        why_fits,
        required_skills,
        learning_path,
        salary_range,
        job_outlook,
        difficulty,
    })
}

fn validate_stage(index: usize, value: &Value) -> Result<LearningStage, AppError> {
    let fields = value
        .as_object()
        .ok_or_else(|| entry_error(index, "learningPath contains a non-object element"))?;

    Ok(LearningStage {
        stage: require_string(index, fields, "stage")?,
        description: require_string(index, fields, "description")?,
    })
}

fn require_string(
    index: usize,
    fields: &Map<String, Value>,
    name: &str,
) -> Result<String, AppError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(entry_error(index, &format!("field `{name}` is not a string"))),
        None => Err(entry_error(index, &format!("missing required field `{name}`"))),
    }
}

fn require_array<'a>(
    index: usize,
    fields: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a Vec<Value>, AppError> {
    let array = match fields.get(name) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(entry_error(index, &format!("field `{name}` is not an array"))),
        None => return Err(entry_error(index, &format!("missing required field `{name}`"))),
    };

    if array.is_empty() {
        return Err(entry_error(index, &format!("field `{name}` must not be empty")));
    }

    Ok(array)
}

fn entry_error(index: usize, message: &str) -> AppError {
    validation_error(&format!("recommendation {index}: {message}"))
}

fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}
